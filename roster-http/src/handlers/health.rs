use axum::{extract::State, Json};
use roster::RosterError;
use std::sync::Arc;

use super::AppState;
use crate::dto::HealthResponse;

/// Health check endpoint. Healthy only when the engine answers.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Engine reachable", body = HealthResponse),
        (status = 500, description = "Engine unreachable")
    )
)]
pub async fn health(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, RosterError> {
    state.sync.check_health().await?;
    Ok(Json(HealthResponse::ok()))
}
