use axum::{
    Router,
    http::Method,
    routing::{MethodFilter, on},
};
use util::state::AppState;

use super::common::{cors, method_not_allowed};

mod get;

pub use get::get_students;

/// `/get-students` (GET).
pub fn students_routes() -> Router<AppState> {
    Router::new().route(
        "/get-students",
        on(MethodFilter::GET, get_students)
            .fallback(method_not_allowed)
            .layer(cors(&[Method::GET])),
    )
}
