//! Account routes forwarded to the backend.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;
use axum::routing::post;
use axum::{Json, Router};
use http::Method;
use memi_catalog::parse_payload;
use memi_core::error::ServiceError;
use memi_core::upstream::UpstreamRequest;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::bearer;
use crate::routes::{relay, to_body};
use crate::state::AppState;

/// Body of a change-password request. Verification of the current password
/// happens in the backend; this layer only requires both fields.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest {
    current_password: String,
    new_password: String,
}

/// POST /api/auth/change-password
async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, ApiError> {
    let request: ChangePasswordRequest = parse_payload("change-password", body)?;
    if request.current_password.is_empty() || request.new_password.is_empty() {
        return Err(ServiceError::Validation(
            "change-password: both currentPassword and newPassword are required".to_owned(),
        )
        .into());
    }

    let upstream_request =
        UpstreamRequest::new(Method::POST, "/api/auth/change-password", bearer(&headers))
            .with_body(to_body(&request)?);
    Ok(relay(state.upstream.forward(upstream_request).await?))
}

/// Returns the account router.
pub fn router() -> Router<AppState> {
    Router::new().route("/change-password", post(change_password))
}
