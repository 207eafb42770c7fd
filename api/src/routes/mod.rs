//! HTTP route entry point.
//!
//! The endpoints are mounted twice: under `/api`, and under `/.netlify/functions`
//! so clients built against the old serverless paths keep working.
//!
//! Route groups:
//! - `/health` → liveness probe
//! - `/get-attendance`, `/save-attendance` → attendance sheet
//! - `/get-students` → student roster

use axum::Router;
use util::state::AppState;

use crate::routes::{
    attendance::attendance_routes, health::health_routes, students::students_routes,
};

pub mod attendance;
pub mod common;
pub mod health;
pub mod students;

/// Path prefixes the endpoint set is served under.
pub const MOUNT_POINTS: [&str; 2] = ["/api", "/.netlify/functions"];

/// Builds the endpoint set, still waiting for its `AppState`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/health", health_routes())
        .merge(attendance_routes())
        .merge(students_routes())
}

/// Builds the complete application with every mount point and the state attached.
///
/// Request logging is layered on in `main`, since it needs the peer address.
pub fn app(app_state: AppState) -> Router {
    MOUNT_POINTS
        .iter()
        .fold(Router::new(), |router, prefix| router.nest(prefix, routes()))
        .with_state(app_state)
}
