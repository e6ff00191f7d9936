//! Route modules, one per resource.

pub mod auth;
pub mod blog;
pub mod categories;
pub mod courses;
pub mod health;
pub mod home;
pub mod messages;
pub mod upload;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use memi_core::error::ServiceError;
use memi_core::upstream::UpstreamResponse;

/// Relays a backend response verbatim: same status, same body.
pub(crate) fn relay(response: UpstreamResponse) -> Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::BAD_GATEWAY);
    (status, Json(response.body)).into_response()
}

/// Serializes a validated payload for forwarding.
pub(crate) fn to_body<T: serde::Serialize>(payload: &T) -> Result<serde_json::Value, ServiceError> {
    serde_json::to_value(payload)
        .map_err(|e| ServiceError::Transport(format!("failed to serialize forwarded payload: {e}")))
}
