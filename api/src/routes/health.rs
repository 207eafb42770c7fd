use axum::{Json, Router, routing::get};
use util::state::AppState;

use crate::response::HealthResponse;

/// Builds the `/health` route group.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// Liveness probe. Does not touch the spreadsheet.
///
/// ```json
/// { "status": "ok" }
/// ```
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
