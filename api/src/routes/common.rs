//! Pieces every endpoint route shares.

use axum::http::{Method, header::CONTENT_TYPE};
use tower_http::cors::{Any, CorsLayer};

use crate::error::ApiError;

/// Fallback for any verb an endpoint does not declare.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Permissive CORS for one endpoint: any origin, `Content-Type`, and the endpoint's
/// verbs plus `OPTIONS`. Every `OPTIONS` request is answered here with an empty 200.
pub fn cors(methods: &[Method]) -> CorsLayer {
    let mut allowed = methods.to_vec();
    allowed.push(Method::OPTIONS);

    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods(allowed)
}
