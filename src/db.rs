use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use crate::error::AppResult;

const SCHEMA: &str = include_str!("../schema.sql");

pub async fn connect(database_url: &str) -> AppResult<DatabaseConnection> {
    let db = Database::connect(database_url).await?;

    // No foreign_keys pragma: MovieID references are intentionally unenforced.
    for pragma in ["journal_mode=WAL", "synchronous=NORMAL", "cache_size=-64000"] {
        db.execute(Statement::from_string(db.get_database_backend(), format!("PRAGMA {pragma}")))
            .await?;
    }

    run_sql(&db, SCHEMA).await?;
    Ok(db)
}

async fn run_sql(db: &DatabaseConnection, sql: &str) -> AppResult<()> {
    for stmt in sql.split(';') {
        let stmt = stmt.trim();
        if stmt.is_empty() {
            continue;
        }
        db.execute(Statement::from_string(db.get_database_backend(), stmt.to_string())).await?;
    }
    Ok(())
}
