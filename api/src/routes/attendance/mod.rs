use axum::{
    Router,
    http::Method,
    routing::{MethodFilter, on, post},
};
use util::state::AppState;

use super::common::{cors, method_not_allowed};

mod get;
mod post;

pub use get::get_attendance;
pub use post::save_attendance;

/// `/get-attendance` (GET) and `/save-attendance` (POST).
pub fn attendance_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/get-attendance",
            on(MethodFilter::GET, get_attendance)
                .fallback(method_not_allowed)
                .layer(cors(&[Method::GET])),
        )
        .route(
            "/save-attendance",
            post(save_attendance)
                .fallback(method_not_allowed)
                .layer(cors(&[Method::POST])),
        )
}
