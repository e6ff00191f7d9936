//! Category proxy routes.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use http::Method;
use memi_catalog::category::CategoryDraft;
use memi_catalog::parse_payload;
use memi_core::upstream::UpstreamRequest;

use crate::error::ApiError;
use crate::middleware::bearer;
use crate::routes::{relay, to_body};
use crate::state::AppState;

/// GET /api/categories
async fn list(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, ApiError> {
    let request = UpstreamRequest::new(Method::GET, "/api/categories", bearer(&headers));
    Ok(relay(state.upstream.forward(request).await?))
}

/// POST /api/categories
async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, ApiError> {
    let draft: CategoryDraft = parse_payload("category", body)?;
    draft.validate()?;

    let request = UpstreamRequest::new(Method::POST, "/api/categories", bearer(&headers))
        .with_body(to_body(&draft)?);
    Ok(relay(state.upstream.forward(request).await?))
}

/// Returns the category proxy router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list).post(create))
}
