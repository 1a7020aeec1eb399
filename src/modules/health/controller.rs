use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: String,
}

/// Liveness probe. Reports which database dialect the process resolved at
/// startup; it does not touch the pool.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = if state.config.database.is_sqlite() {
        "sqlite"
    } else {
        "mysql"
    };

    Json(HealthResponse {
        status: "ok",
        database: database.to_string(),
    })
}
