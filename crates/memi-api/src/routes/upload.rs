//! Upload forwarding routes.
//!
//! Multipart bodies are forwarded byte-for-byte with their original
//! `content-type`; this layer never parses the form itself. Successful
//! backend responses are wrapped as `{success: true, data}`; backend
//! failures are relayed verbatim.

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Json;
use http::Method;
use serde_json::json;

use crate::error::ApiError;
use crate::middleware::bearer;
use crate::routes::relay;
use crate::state::AppState;

async fn forward_upload(
    state: AppState,
    headers: HeaderMap,
    path: &str,
    body: Bytes,
) -> Result<Response, ApiError> {
    let content_type = headers
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned);

    let response = state
        .upstream
        .forward_raw(
            Method::POST,
            path,
            bearer(&headers),
            content_type,
            body.to_vec(),
        )
        .await?;

    if response.is_success() {
        let status = axum::http::StatusCode::from_u16(response.status)
            .unwrap_or(axum::http::StatusCode::OK);
        Ok((status, Json(json!({ "success": true, "data": response.body }))).into_response())
    } else {
        Ok(relay(response))
    }
}

/// POST /api/upload/multiple
async fn multiple(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    forward_upload(state, headers, "/api/upload/multiple", body).await
}

/// POST /api/upload/delete
async fn delete(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    forward_upload(state, headers, "/api/upload/delete", body).await
}

/// Returns the upload forwarding router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/multiple", post(multiple))
        .route("/delete", post(delete))
}
