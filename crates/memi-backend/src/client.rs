//! Reqwest-backed [`Upstream`] implementation.

use std::time::Duration;

use async_trait::async_trait;
use http::Method;
use memi_core::error::ServiceError;
use memi_core::upstream::{Upstream, UpstreamRequest, UpstreamResponse};

/// HTTP client for the external content backend.
///
/// Relays whatever the backend answers, status and body alike; only
/// transport-level failures (connect, timeout, body read) become errors.
/// Never retries.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Builds a client against `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Transport` if the underlying client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Transport(format!("failed to build http client: {e}")))?;

        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn into_upstream_response(
        response: reqwest::Response,
    ) -> Result<UpstreamResponse, ServiceError> {
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ServiceError::Transport(format!("failed to read backend body: {e}")))?;

        let body = if text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&text)
                .unwrap_or_else(|_| serde_json::json!({ "message": text }))
        };

        Ok(UpstreamResponse { status, body })
    }
}

#[async_trait]
impl Upstream for BackendClient {
    async fn forward(&self, request: UpstreamRequest) -> Result<UpstreamResponse, ServiceError> {
        let url = self.url(&request.path);
        tracing::debug!(method = %request.method, %url, "forwarding to backend");

        let mut builder = self.http.request(request.method.clone(), &url);
        if let Some(bearer) = &request.bearer {
            builder = builder.header(http::header::AUTHORIZATION, bearer.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "backend request failed");
            ServiceError::Transport(format!("backend unreachable: {e}"))
        })?;

        Self::into_upstream_response(response).await
    }

    async fn forward_raw(
        &self,
        method: Method,
        path: &str,
        bearer: Option<String>,
        content_type: Option<String>,
        body: Vec<u8>,
    ) -> Result<UpstreamResponse, ServiceError> {
        let url = self.url(path);
        tracing::debug!(%method, %url, bytes = body.len(), "forwarding raw body to backend");

        let mut builder = self.http.request(method, &url).body(body);
        if let Some(bearer) = &bearer {
            builder = builder.header(http::header::AUTHORIZATION, bearer.as_str());
        }
        if let Some(content_type) = &content_type {
            builder = builder.header(http::header::CONTENT_TYPE, content_type.as_str());
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "backend upload failed");
            ServiceError::Transport(format!("backend unreachable: {e}"))
        })?;

        Self::into_upstream_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client =
            BackendClient::new("http://backend.internal/", Duration::from_secs(5)).unwrap();

        assert_eq!(
            client.url("/api/blog"),
            "http://backend.internal/api/blog"
        );
    }
}
