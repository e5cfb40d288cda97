pub mod health;
pub mod profile;
pub mod session;

use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;

use crate::interface_adapters::protocol::ErrorResponse;

// Helper to build a JSON error response.
pub(crate) fn error_response(
    status: StatusCode,
    message: &str,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

// Extract the bearer token from the Authorization header, if present.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
