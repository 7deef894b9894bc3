use axum::{extract::State, http::StatusCode, Json};
use tracing::error;

use common::types::Health;

use crate::state::AppState;

/// Process liveness plus store connectivity.
#[utoipa::path(
    get, path = "/health", tag = "health",
    responses(
        (status = 200, description = "API is running", body = crate::openapi::HealthDoc),
        (status = 500, description = "Database connection failed", body = crate::openapi::HealthDoc)
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Health>) {
    match state.dishes.database_state().await {
        Ok(database) => (StatusCode::OK, Json(Health::ok(database))),
        Err(e) => {
            error!(error = %e, "health check could not reach the store");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(Health::error("Database connection failed")))
        }
    }
}
