//! Blog post payloads.

use memi_core::error::ServiceError;
use serde::{Deserialize, Serialize};

use crate::require_non_empty;

/// A blog post as accepted on create/update. The backend assigns `id` and
/// `slug` on create; both are carried through opaquely when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub image: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_image: Option<String>,
}

impl BlogPostDraft {
    /// Checks the create/update requirements: `title`, `description`,
    /// `image` and `category` must all be non-empty.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` naming the first empty field.
    pub fn validate(&self) -> Result<(), ServiceError> {
        require_non_empty("blog post", "title", &self.title)?;
        require_non_empty("blog post", "description", &self.description)?;
        require_non_empty("blog post", "image", &self.image)?;
        require_non_empty("blog post", "category", &self.category)?;
        Ok(())
    }
}
