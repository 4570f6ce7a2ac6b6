use axum::{extract::State, routing::get, Json, Router};
use sqlx::PgPool;

use solar_client::{db, SolarMeasurement};

use crate::error::ApiError;
use crate::health::{check_database_health, process_health, DbHealth, ProcessHealth};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

/// The full route table, built once at startup. Anything not listed here is
/// a 404 from the framework.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/health", get(health))
        .route("/db-health", get(db_health))
        .route("/energy/today", get(energy_today))
        .with_state(state)
}

async fn hello() -> &'static str {
    "Hello World!"
}

async fn health() -> Json<ProcessHealth> {
    Json(process_health())
}

/// Always answers 200; a down database is reported in the body, not the
/// status code.
async fn db_health(State(state): State<AppState>) -> Json<DbHealth> {
    Json(check_database_health(&state.pool).await)
}

/// Measurements for the current calendar day, oldest first. Database
/// failures surface as a 500.
async fn energy_today(
    State(state): State<AppState>,
) -> Result<Json<Vec<SolarMeasurement>>, ApiError> {
    let rows = db::today_measurements(&state.pool).await?;
    Ok(Json(rows))
}
