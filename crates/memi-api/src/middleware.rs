//! Request middleware: credential-presence gating and request-id tracing.

use axum::extract::Request;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use memi_core::error::ServiceError;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::ApiError;

/// Returns the caller's `authorization` header value, forwarded opaquely to
/// the backend. Values that are not valid UTF-8 are treated as absent.
#[must_use]
pub fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
}

/// Checks that a credential is present. Presence only — validity is the
/// backend's concern.
///
/// # Errors
///
/// Returns `ServiceError::MissingCredential` (401) when the header is
/// absent.
pub fn ensure_credential(headers: &HeaderMap) -> Result<(), ApiError> {
    if headers.contains_key(AUTHORIZATION) {
        Ok(())
    } else {
        Err(ApiError(ServiceError::MissingCredential))
    }
}

/// Middleware form of [`ensure_credential`]: rejects with 401 before the
/// inner handler (and therefore before any backend call) runs.
pub async fn require_auth(request: Request, next: Next) -> Response {
    if let Err(err) = ensure_credential(request.headers()) {
        return err.into_response();
    }
    next.run(request).await
}

/// Assigns a request id, records it on the request span and echoes it back
/// in an `x-request-id` response header.
pub async fn request_id(request: Request, next: Next) -> Response {
    let id = Uuid::new_v4();
    let span = tracing::info_span!(
        "request",
        request_id = %id,
        method = %request.method(),
        uri = %request.uri()
    );

    let mut response = next.run(request).instrument(span).await;
    if let Ok(value) = id.to_string().parse() {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}
