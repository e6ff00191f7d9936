//! Contact-form message payloads.

use chrono::{DateTime, Utc};
use memi_core::error::ServiceError;
use serde::{Deserialize, Serialize};

use crate::require_non_empty;

/// A contact-form submission as accepted on create. `id`, `createdAt` and
/// the initial `read` flag are assigned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessageDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inquiry_type: Option<String>,
    pub subject: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub read: bool,
}

impl ContactMessageDraft {
    /// Requires non-empty name, email, subject and message; the email must
    /// at least contain an `@`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` naming the offending field.
    pub fn validate(&self) -> Result<(), ServiceError> {
        require_non_empty("contact message", "firstName", &self.first_name)?;
        require_non_empty("contact message", "lastName", &self.last_name)?;
        require_non_empty("contact message", "email", &self.email)?;
        if !self.email.contains('@') {
            return Err(ServiceError::Validation(
                "contact message: 'email' is not a valid address".to_owned(),
            ));
        }
        require_non_empty("contact message", "subject", &self.subject)?;
        require_non_empty("contact message", "message", &self.message)?;
        Ok(())
    }
}

/// The read-flag patch accepted by `PATCH /api/dashboard/messages/{id}`.
/// Nothing else on a message is mutable through this service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReadFlagPatch {
    pub read: bool,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::parse_payload;

    fn valid_body() -> serde_json::Value {
        json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "subject": "Partnership",
            "message": "Let's talk."
        })
    }

    #[test]
    fn test_valid_message_passes() {
        let draft: ContactMessageDraft = parse_payload("contact message", valid_body()).unwrap();
        assert!(draft.validate().is_ok());
        assert!(!draft.read);
    }

    #[test]
    fn test_email_without_at_is_rejected() {
        let mut body = valid_body();
        body["email"] = json!("not-an-email");

        let draft: ContactMessageDraft = parse_payload("contact message", body).unwrap();
        assert!(draft.validate().unwrap_err().to_string().contains("email"));
    }

    #[test]
    fn test_read_flag_patch_rejects_extra_fields() {
        let err =
            parse_payload::<ReadFlagPatch>("message patch", json!({ "read": true, "id": "m1" }));
        assert!(err.is_err());
    }

    #[test]
    fn test_read_flag_patch_requires_boolean() {
        let err = parse_payload::<ReadFlagPatch>("message patch", json!({ "read": "yes" }));
        assert!(err.is_err());
    }
}
