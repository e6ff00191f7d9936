//! Contact-message proxy routes.
//!
//! The whole resource sits behind the credential-presence gate (layered in
//! `app`), so every handler here can assume an `authorization` header
//! exists and simply forwards it.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use http::Method;
use memi_catalog::message::{ContactMessageDraft, ReadFlagPatch};
use memi_catalog::parse_payload;
use memi_core::upstream::UpstreamRequest;

use crate::error::ApiError;
use crate::middleware::bearer;
use crate::routes::{relay, to_body};
use crate::state::AppState;

/// GET /api/dashboard/messages
async fn list(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, ApiError> {
    let request = UpstreamRequest::new(Method::GET, "/api/dashboard/messages", bearer(&headers));
    Ok(relay(state.upstream.forward(request).await?))
}

/// POST /api/dashboard/messages
async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, ApiError> {
    let draft: ContactMessageDraft = parse_payload("contact message", body)?;
    draft.validate()?;

    let request = UpstreamRequest::new(Method::POST, "/api/dashboard/messages", bearer(&headers))
        .with_body(to_body(&draft)?);
    Ok(relay(state.upstream.forward(request).await?))
}

/// GET /api/dashboard/messages/{id}
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let request = UpstreamRequest::new(
        Method::GET,
        format!("/api/dashboard/messages/{id}"),
        bearer(&headers),
    );
    Ok(relay(state.upstream.forward(request).await?))
}

/// PATCH /api/dashboard/messages/{id} — read-flag toggle only.
async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, ApiError> {
    let patch: ReadFlagPatch = parse_payload("message patch", body)?;

    let request = UpstreamRequest::new(
        Method::PATCH,
        format!("/api/dashboard/messages/{id}"),
        bearer(&headers),
    )
    .with_body(to_body(&patch)?);
    Ok(relay(state.upstream.forward(request).await?))
}

/// DELETE /api/dashboard/messages/{id}
async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let request = UpstreamRequest::new(
        Method::DELETE,
        format!("/api/dashboard/messages/{id}"),
        bearer(&headers),
    );
    Ok(relay(state.upstream.forward(request).await?))
}

/// Returns the message proxy router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_by_id).patch(mark_read).delete(delete))
}
