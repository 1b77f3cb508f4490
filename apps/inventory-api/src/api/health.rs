//! Readiness endpoint

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadyResponse {
    status: String,
    mongodb: bool,
}

/// Create the readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - verifies MongoDB connectivity
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let mongodb_healthy = database::mongodb::check_health(&state.mongo_client).await;

    let status = if mongodb_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ReadyResponse {
            status: if mongodb_healthy {
                "ready"
            } else {
                "unhealthy"
            }
            .to_string(),
            mongodb: mongodb_healthy,
        }),
    )
}
