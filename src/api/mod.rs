//! HTTP boundary built on an axum `Router`
//!
//! `router` wires every endpoint to a shared `ServiceContext`; the Lambda
//! binary hands the router straight to `lambda_http::run`. Errors are
//! rendered as `{"error": "<message>"}` with the matching status.

mod context;
mod handlers;
mod routes;

pub use context::ServiceContext;
pub use routes::router;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Error response carried back to the client as JSON
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
