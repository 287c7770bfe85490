use axum::{extract::State, Json};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::{db::check_connection, AppState};

/// Liveness and database reachability
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` or `unhealthy`
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "healthy")]
    pub database: String,
    pub version: String,
    pub timestamp: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match check_connection(&state.db).await {
        Ok(()) => "healthy",
        Err(e) => {
            warn!(error = %e, "Health check could not reach the database");
            "unhealthy"
        }
    };

    Json(HealthResponse {
        status: database.to_string(),
        database: database.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
