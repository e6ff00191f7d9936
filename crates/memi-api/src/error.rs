//! MEMi — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use memi_core::error::ServiceError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Outbound HTTP client construction failed.
    #[error("backend client error: {0}")]
    Backend(#[from] ServiceError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `ServiceError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self.0 {
            ServiceError::Validation(_) => {
                (StatusCode::BAD_REQUEST, "validation_error", self.0.to_string())
            }
            ServiceError::UnknownSection(_) => {
                (StatusCode::BAD_REQUEST, "unknown_section", self.0.to_string())
            }
            ServiceError::MissingCredential => (
                StatusCode::UNAUTHORIZED,
                "missing_credential",
                self.0.to_string(),
            ),
            ServiceError::Transport(detail) => {
                // Detail is logged, never returned to the caller.
                tracing::error!(%detail, "upstream transport failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "upstream_unreachable",
                    "the backend service is currently unavailable".to_owned(),
                )
            }
        };

        let body = ErrorBody {
            error: error_code,
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: ServiceError) -> StatusCode {
        let response = ApiError(err).into_response();
        response.status()
    }

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(
            status_of(ServiceError::Validation("bad input".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_unknown_section_maps_to_400() {
        assert_eq!(
            status_of(ServiceError::UnknownSection("heroSection".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_missing_credential_maps_to_401() {
        assert_eq!(
            status_of(ServiceError::MissingCredential),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_transport_maps_to_500() {
        assert_eq!(
            status_of(ServiceError::Transport("connection refused".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
