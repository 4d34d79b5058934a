use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};
use serde_json::{Value, json};

use crate::{
    AppState,
    entities::{movie, screening},
    error::AppResult,
    models::{ScreeningPayload, StatsQuery, StatsResponse},
    stats,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/movies", get(list_movies))
        .route("/screenings", get(list_screenings).post(create_screening))
        .route("/screenings/{id}", put(update_screening).delete(delete_screening))
        .route("/screening_stats", get(screening_stats))
        .with_state(state)
}

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<movie::Model>>> {
    Ok(Json(movie::Entity::find().all(&state.db).await?))
}

pub async fn list_screenings(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<screening::Model>>> {
    Ok(Json(screening::Entity::find().all(&state.db).await?))
}

pub async fn create_screening(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScreeningPayload>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let model = screening::ActiveModel {
        screening_id: Default::default(),
        movie_id: Set(req.movie_id),
        is_3d: Set(req.is_3d),
        available_seats: Set(req.available_seats),
        screening_date_time: Set(req.screening_date_time),
    };
    screening::Entity::insert(model).exec(&state.db).await?;

    Ok((StatusCode::CREATED, Json(json!({ "message": "Screening added" }))))
}

// Replaces all columns; an id with no row affects nothing and still succeeds.
pub async fn update_screening(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(req): Json<ScreeningPayload>,
) -> AppResult<Json<Value>> {
    screening::Entity::update_many()
        .set(screening::ActiveModel {
            screening_id: Default::default(),
            movie_id: Set(req.movie_id),
            is_3d: Set(req.is_3d),
            available_seats: Set(req.available_seats),
            screening_date_time: Set(req.screening_date_time),
        })
        .filter(screening::Column::ScreeningId.eq(id))
        .exec(&state.db)
        .await?;

    Ok(Json(json!({ "message": "Screening updated" })))
}

pub async fn delete_screening(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<Value>> {
    screening::Entity::delete_by_id(id).exec(&state.db).await?;

    Ok(Json(json!({ "message": "Screening deleted" })))
}

pub async fn screening_stats(
    State(state): State<Arc<AppState>>,
    Query(q): Query<StatsQuery>,
) -> AppResult<Json<StatsResponse>> {
    Ok(Json(stats::screening_stats(&state.db, &q).await?))
}
