//! MEMi — secondary entity payloads.
//!
//! Blog posts, courses, categories and contact messages live in the external
//! backend; this crate defines the payload shapes the proxy accepts and the
//! boundary validation applied before any request is forwarded.

pub mod blog;
pub mod category;
pub mod course;
pub mod message;

use memi_core::error::ServiceError;
use serde::Deserialize;
use serde_json::Value;

/// Deserializes a request body into a typed payload, mapping serde failures
/// to a 400-level validation error naming the entity.
///
/// # Errors
///
/// Returns `ServiceError::Validation` with the serde message when the body
/// does not match the payload shape (wrong types, out-of-range numbers,
/// unknown enum variants).
pub fn parse_payload<T: for<'de> Deserialize<'de>>(
    entity: &str,
    body: Value,
) -> Result<T, ServiceError> {
    serde_json::from_value(body)
        .map_err(|e| ServiceError::Validation(format!("invalid {entity} payload: {e}")))
}

pub(crate) fn require_non_empty(entity: &str, field: &str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::Validation(format!(
            "{entity}: '{field}' is required and must be non-empty"
        )));
    }
    Ok(())
}
