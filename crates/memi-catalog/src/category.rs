//! Category payloads.

use memi_core::error::ServiceError;
use serde::{Deserialize, Serialize};

use crate::require_non_empty;

/// A catalog category as accepted on create.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl CategoryDraft {
    /// Requires non-empty `name`, `description` and `slug`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` naming the first empty field.
    pub fn validate(&self) -> Result<(), ServiceError> {
        require_non_empty("category", "name", &self.name)?;
        require_non_empty("category", "description", &self.description)?;
        require_non_empty("category", "slug", &self.slug)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::parse_payload;

    #[test]
    fn test_valid_category_passes() {
        let body = json!({ "name": "News", "description": "Product news", "slug": "news" });

        let draft: CategoryDraft = parse_payload("category", body).unwrap();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_empty_slug_is_rejected() {
        let body = json!({ "name": "News", "description": "d", "slug": "" });

        let draft: CategoryDraft = parse_payload("category", body).unwrap();
        assert!(draft.validate().unwrap_err().to_string().contains("slug"));
    }
}
