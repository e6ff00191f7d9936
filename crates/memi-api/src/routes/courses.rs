//! Course catalog proxy routes.
//!
//! Same shape as the blog proxy, with the stricter course payload: the
//! difficulty level must be one of the three catalog levels and the student
//! count a non-negative integer, both enforced before any backend call.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use http::Method;
use memi_catalog::course::CourseDraft;
use memi_catalog::parse_payload;
use memi_core::upstream::UpstreamRequest;

use crate::error::ApiError;
use crate::middleware::bearer;
use crate::routes::{relay, to_body};
use crate::state::AppState;

/// GET /api/courses
async fn list(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, ApiError> {
    let request = UpstreamRequest::new(Method::GET, "/api/courses", bearer(&headers));
    Ok(relay(state.upstream.forward(request).await?))
}

/// POST /api/courses
async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, ApiError> {
    let draft: CourseDraft = parse_payload("course", body)?;
    draft.validate()?;

    let request = UpstreamRequest::new(Method::POST, "/api/courses", bearer(&headers))
        .with_body(to_body(&draft)?);
    Ok(relay(state.upstream.forward(request).await?))
}

/// GET /api/courses/{id}
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let request = UpstreamRequest::new(Method::GET, format!("/api/courses/{id}"), bearer(&headers));
    Ok(relay(state.upstream.forward(request).await?))
}

/// PUT /api/courses/{id}
async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, ApiError> {
    let draft: CourseDraft = parse_payload("course", body)?;
    draft.validate()?;

    let request = UpstreamRequest::new(Method::PUT, format!("/api/courses/{id}"), bearer(&headers))
        .with_body(to_body(&draft)?);
    Ok(relay(state.upstream.forward(request).await?))
}

/// DELETE /api/courses/{id}
async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let request =
        UpstreamRequest::new(Method::DELETE, format!("/api/courses/{id}"), bearer(&headers));
    Ok(relay(state.upstream.forward(request).await?))
}

/// Returns the course proxy router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_by_id).put(update).delete(delete))
}
