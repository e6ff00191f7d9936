//! Mock `Upstream` implementations for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use http::Method;
use memi_core::error::ServiceError;
use memi_core::upstream::{Upstream, UpstreamRequest, UpstreamResponse};

/// A recorded raw (upload) forward.
#[derive(Debug, Clone)]
pub struct RawForward {
    pub method: Method,
    pub path: String,
    pub bearer: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// An upstream that records every forwarded request and replays queued
/// responses in order. When the queue runs dry it answers `200 {}`.
#[derive(Debug, Default)]
pub struct StubUpstream {
    responses: Mutex<VecDeque<UpstreamResponse>>,
    forwarded: Mutex<Vec<UpstreamRequest>>,
    raw_forwarded: Mutex<Vec<RawForward>>,
}

impl StubUpstream {
    /// Creates a stub with an empty response queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stub that will answer the given responses in order.
    #[must_use]
    pub fn with_responses(responses: Vec<UpstreamResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            forwarded: Mutex::new(Vec::new()),
            raw_forwarded: Mutex::new(Vec::new()),
        }
    }

    /// Queues one more response.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn push_response(&self, status: u16, body: serde_json::Value) {
        self.responses
            .lock()
            .unwrap()
            .push_back(UpstreamResponse { status, body });
    }

    /// Snapshot of all JSON requests forwarded so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn forwarded(&self) -> Vec<UpstreamRequest> {
        self.forwarded.lock().unwrap().clone()
    }

    /// Snapshot of all raw (upload) requests forwarded so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn raw_forwarded(&self) -> Vec<RawForward> {
        self.raw_forwarded.lock().unwrap().clone()
    }

    fn next_response(&self) -> UpstreamResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(UpstreamResponse {
                status: 200,
                body: serde_json::json!({}),
            })
    }
}

#[async_trait]
impl Upstream for StubUpstream {
    async fn forward(&self, request: UpstreamRequest) -> Result<UpstreamResponse, ServiceError> {
        self.forwarded.lock().unwrap().push(request);
        Ok(self.next_response())
    }

    async fn forward_raw(
        &self,
        method: Method,
        path: &str,
        bearer: Option<String>,
        content_type: Option<String>,
        body: Vec<u8>,
    ) -> Result<UpstreamResponse, ServiceError> {
        self.raw_forwarded.lock().unwrap().push(RawForward {
            method,
            path: path.to_owned(),
            bearer,
            content_type,
            body,
        });
        Ok(self.next_response())
    }
}

/// An upstream that always fails with a transport error. Useful for testing
/// the generic-500 path.
#[derive(Debug, Default)]
pub struct FailingUpstream;

#[async_trait]
impl Upstream for FailingUpstream {
    async fn forward(&self, _request: UpstreamRequest) -> Result<UpstreamResponse, ServiceError> {
        Err(ServiceError::Transport("connection refused".into()))
    }

    async fn forward_raw(
        &self,
        _method: Method,
        _path: &str,
        _bearer: Option<String>,
        _content_type: Option<String>,
        _body: Vec<u8>,
    ) -> Result<UpstreamResponse, ServiceError> {
        Err(ServiceError::Transport("connection refused".into()))
    }
}
