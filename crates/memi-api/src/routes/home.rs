//! Home-page content aggregate routes.
//!
//! `GET` is the public read used by the marketing site; `PUT` is the
//! dashboard editors' partial-update endpoint. A `PUT` body is a subset of
//! section keys, each given in full — sections absent from the body are
//! never touched.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};
use memi_content::{HomeContent, HomeContentPatch};

use crate::error::ApiError;
use crate::middleware::ensure_credential;
use crate::state::AppState;

/// GET /api/dashboard/home
async fn get_home(State(state): State<AppState>) -> Json<HomeContent> {
    Json(state.content.get().await)
}

/// PUT /api/dashboard/home
async fn put_home(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<HomeContent>, ApiError> {
    ensure_credential(&headers)?;

    let patch = HomeContentPatch::from_value(body)?;
    let updated = state.content.update(patch).await?;
    tracing::info!("home content updated");
    Ok(Json(updated))
}

/// Returns the home content router.
pub fn router() -> Router<AppState> {
    Router::new().route("/home", get(get_home).put(put_home))
}
