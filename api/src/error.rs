//! Errors a handler can return, and how each one is rendered.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use codec::CodecError;
use serde::Serialize;
use serde_json::{Map, Value};
use sheets::SheetsError;
use thiserror::Error;
use tracing::{error, warn};

use crate::response::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The body could not be parsed as JSON at all.
    #[error("Invalid request body")]
    InvalidBody,

    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Missing configuration or a failed remote call.
    #[error(transparent)]
    Sheets(#[from] SheetsError),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody | ApiError::Codec(_) => StatusCode::BAD_REQUEST,
            ApiError::Sheets(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Renders `{ "error": ..., <fallback fields> }`.
    ///
    /// Fetch endpoints pass their empty payload here so clients always find the
    /// collection they expect, even on failure.
    pub fn with_fallback<T: Serialize>(self, fallback: T) -> Response {
        let status = self.status();

        match &self {
            ApiError::Sheets(err) if err.is_config() => {
                error!(error = %err, "Sheets configuration incomplete")
            }
            ApiError::Sheets(err) => error!(error = %err, "Sheets call failed"),
            ApiError::MethodNotAllowed => {}
            other => warn!(error = %other, "Rejected request"),
        }

        let body = ErrorResponse {
            error: self.to_string(),
            fallback,
        };
        (status, Json(body)).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.with_fallback(Map::<String, Value>::new())
    }
}
