//! Blog post proxy routes.
//!
//! Reads are open; writes are validated here and then forwarded with
//! whatever credential the caller supplied. The backend's status and body
//! are relayed verbatim.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use http::Method;
use memi_catalog::blog::BlogPostDraft;
use memi_catalog::parse_payload;
use memi_core::upstream::UpstreamRequest;

use crate::error::ApiError;
use crate::middleware::bearer;
use crate::routes::{relay, to_body};
use crate::state::AppState;

/// GET /api/blog
async fn list(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, ApiError> {
    let request = UpstreamRequest::new(Method::GET, "/api/blog", bearer(&headers));
    Ok(relay(state.upstream.forward(request).await?))
}

/// POST /api/blog
async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, ApiError> {
    let draft: BlogPostDraft = parse_payload("blog post", body)?;
    draft.validate()?;

    let request = UpstreamRequest::new(Method::POST, "/api/blog", bearer(&headers))
        .with_body(to_body(&draft)?);
    Ok(relay(state.upstream.forward(request).await?))
}

/// GET /api/blog/{slug}
async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let request = UpstreamRequest::new(Method::GET, format!("/api/blog/{slug}"), bearer(&headers));
    Ok(relay(state.upstream.forward(request).await?))
}

/// PUT /api/blog/{slug}
async fn update(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, ApiError> {
    let draft: BlogPostDraft = parse_payload("blog post", body)?;
    draft.validate()?;

    let request = UpstreamRequest::new(Method::PUT, format!("/api/blog/{slug}"), bearer(&headers))
        .with_body(to_body(&draft)?);
    Ok(relay(state.upstream.forward(request).await?))
}

/// DELETE /api/blog/{slug}
async fn delete(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let request =
        UpstreamRequest::new(Method::DELETE, format!("/api/blog/{slug}"), bearer(&headers));
    Ok(relay(state.upstream.forward(request).await?))
}

/// Returns the blog proxy router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{slug}", get(get_by_slug).put(update).delete(delete))
}
