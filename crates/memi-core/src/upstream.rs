//! Upstream backend abstraction.
//!
//! Proxy routes never talk to the external backend directly; they go through
//! the [`Upstream`] trait so tests can substitute a deterministic stub.

use async_trait::async_trait;
use http::Method;

use crate::error::ServiceError;

/// A request to be forwarded to the external backend.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    /// HTTP method to use against the backend resource.
    pub method: Method,
    /// Backend-relative path, e.g. `/api/blog/my-post`.
    pub path: String,
    /// The caller's `authorization` header value, forwarded opaquely.
    pub bearer: Option<String>,
    /// JSON body, if any.
    pub body: Option<serde_json::Value>,
}

impl UpstreamRequest {
    /// Builds a body-less request.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>, bearer: Option<String>) -> Self {
        Self {
            method,
            path: path.into(),
            bearer,
            body: None,
        }
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// What the backend answered. Non-2xx statuses are ordinary responses here,
/// not errors — the proxy relays them verbatim.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    /// HTTP status code returned by the backend.
    pub status: u16,
    /// Response body. Non-JSON backend bodies are wrapped as
    /// `{"message": <text>}` so the proxy always emits JSON.
    pub body: serde_json::Value,
}

impl UpstreamResponse {
    /// True for any 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The seam to the external backend service.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Forward a JSON request and return the backend's response.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Transport` if the backend is unreachable or
    /// its response cannot be read. Backend-level failures (4xx/5xx) are
    /// returned as an `UpstreamResponse`, not an error.
    async fn forward(&self, request: UpstreamRequest) -> Result<UpstreamResponse, ServiceError>;

    /// Forward a raw body (multipart upload payloads) with its original
    /// `content-type`, preserved byte-for-byte.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Transport` on connection or read failure.
    async fn forward_raw(
        &self,
        method: Method,
        path: &str,
        bearer: Option<String>,
        content_type: Option<String>,
        body: Vec<u8>,
    ) -> Result<UpstreamResponse, ServiceError>;
}
