use anyhow::Context;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
    sea_query::{Expr, Func, SimpleExpr},
};
use tracing::debug;

use crate::{
    entities::{movie, screening},
    error::{AppError, AppResult},
    models::{GenreCount, ScreeningRow, ScreeningStats, StatsQuery, StatsResponse, Totals},
};

const MAX_TITLE_FILTER_LEN: usize = 100;

pub async fn screening_stats(db: &DatabaseConnection, q: &StatsQuery) -> AppResult<StatsResponse> {
    let filter = build_filter(q)?;

    let screenings = filtered_screenings(db, filter.clone()).await?;
    if screenings.is_empty() {
        return Err(AppError::NotFound("No screenings found".to_string()));
    }

    let totals = screening_totals(db, filter.clone()).await?;
    let genre = prevalent_genre(db, filter).await?;

    Ok(StatsResponse {
        screenings,
        stats: ScreeningStats {
            total_count: totals.total_count,
            avg_seats: round1(totals.avg_seats.unwrap_or_default()),
            avg_duration: round1(totals.avg_duration.unwrap_or_default()),
            prevalent_genre: genre.unwrap_or_else(|| "N/A".to_string()),
        },
    })
}

// One condition shared by the detail, aggregate and genre queries. Predicates
// are added only for parameters that arrived non-blank.
pub fn build_filter(q: &StatsQuery) -> AppResult<Condition> {
    let mut cond = Condition::all();

    if let Some(from) = present(&q.from) {
        cond = cond.add(screening::Column::ScreeningDateTime.gte(from));
    }
    if let Some(to) = present(&q.to) {
        cond = cond.add(screening::Column::ScreeningDateTime.lte(to));
    }
    if let Some(name) = present(&q.movie_name) {
        let name = sanitize(name, MAX_TITLE_FILTER_LEN);
        if !name.is_empty() {
            cond = cond.add(
                Expr::expr(Func::lower(Expr::col((movie::Entity, movie::Column::Title))))
                    .like(format!("%{}%", name.to_lowercase())),
            );
        }
    }
    if let Some(min_seats) = present(&q.min_seats) {
        let min_seats: i64 = min_seats.parse().context("minSeats")?;
        cond = cond.add(screening::Column::AvailableSeats.gte(min_seats));
    }

    Ok(cond)
}

async fn filtered_screenings(
    db: &DatabaseConnection,
    filter: Condition,
) -> AppResult<Vec<ScreeningRow>> {
    let rows = screening::Entity::find()
        .join(JoinType::InnerJoin, screening::Relation::Movie.def())
        .select_only()
        .column_as(screening::Column::ScreeningId, "screening_id")
        .column_as(screening::Column::AvailableSeats, "available_seats")
        .column_as(screening::Column::ScreeningDateTime, "screening_date_time")
        .column_as(screening::Column::Is3d, "is_3d")
        .column_as(movie::Column::Title, "title")
        .column_as(movie::Column::Genre, "genre")
        .column_as(movie::Column::Duration, "duration")
        .filter(filter)
        .order_by_asc(screening::Column::ScreeningDateTime)
        .into_model::<ScreeningRow>()
        .all(db)
        .await?;

    debug!(matched = rows.len(), "filtered screenings");
    Ok(rows)
}

async fn screening_totals(db: &DatabaseConnection, filter: Condition) -> AppResult<Totals> {
    let totals = screening::Entity::find()
        .join(JoinType::InnerJoin, screening::Relation::Movie.def())
        .select_only()
        .column_as(screening::Column::ScreeningId.count(), "total_count")
        .column_as(
            SimpleExpr::from(Func::avg(Expr::col((
                screening::Entity,
                screening::Column::AvailableSeats,
            )))),
            "avg_seats",
        )
        .column_as(
            SimpleExpr::from(Func::avg(Expr::col((movie::Entity, movie::Column::Duration)))),
            "avg_duration",
        )
        .filter(filter)
        .into_model::<Totals>()
        .one(db)
        .await?;

    Ok(totals.unwrap_or_default())
}

async fn prevalent_genre(
    db: &DatabaseConnection,
    filter: Condition,
) -> AppResult<Option<String>> {
    let top = screening::Entity::find()
        .join(JoinType::InnerJoin, screening::Relation::Movie.def())
        .select_only()
        .column_as(movie::Column::Genre, "genre")
        .column_as(screening::Column::ScreeningId.count(), "cnt")
        .filter(filter)
        .group_by(movie::Column::Genre)
        .order_by_desc(screening::Column::ScreeningId.count())
        .into_model::<GenreCount>()
        .one(db)
        .await?;

    if let Some(g) = &top {
        debug!(genre = %g.genre, count = g.cnt, "prevalent genre");
    }
    Ok(top.map(|g| g.genre))
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// Trim, keep word characters, whitespace and common punctuation, truncate.
// Placeholders already bind the value; this only narrows what text can match.
fn sanitize(s: &str, max_len: usize) -> String {
    s.trim()
        .chars()
        .filter(|&c| c.is_alphanumeric() || c == '_' || c.is_whitespace() || "-.,!?".contains(c))
        .take(max_len)
        .collect()
}
