//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use memi_api::state::AppState;
use memi_content::ContentStore;
use memi_core::upstream::Upstream;
use memi_test_support::{FailingUpstream, StubUpstream};

/// The app under test plus handles on its injected collaborators.
pub struct TestApp {
    pub app: Router,
    pub store: Arc<ContentStore>,
    pub upstream: Arc<StubUpstream>,
}

/// Build the full app router with a fresh content store and a stub
/// upstream. Uses the same `memi_api::app` assembly as `main.rs`.
pub fn build_test_app() -> TestApp {
    let store = Arc::new(ContentStore::new());
    let upstream = Arc::new(StubUpstream::new());
    let state = AppState::new(
        Arc::clone(&store),
        Arc::clone(&upstream) as Arc<dyn Upstream>,
    );

    TestApp {
        app: memi_api::app(state),
        store,
        upstream,
    }
}

/// Build the app with an upstream that always fails at the transport level.
pub fn build_failing_app() -> Router {
    let state = AppState::new(Arc::new(ContentStore::new()), Arc::new(FailingUpstream));
    memi_api::app(state)
}

/// Send a request and return the status plus decoded JSON body. Empty
/// bodies decode to `Value::Null`.
pub async fn request(
    app: Router,
    method: &str,
    uri: &str,
    auth: Option<&str>,
    body: Option<&serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    request(app, "GET", uri, None, None).await
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    request(app, "POST", uri, None, Some(body)).await
}

/// Send a request with a raw body (upload tests) and return the response.
pub async fn request_raw(
    app: Router,
    uri: &str,
    auth: Option<&str>,
    content_type: &str,
    body: Vec<u8>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", content_type);
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    let request = builder.body(Body::from(body)).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}
