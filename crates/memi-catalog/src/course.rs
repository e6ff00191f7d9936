//! Course payloads.

use memi_core::error::ServiceError;
use serde::{Deserialize, Serialize};

use crate::require_non_empty;

/// Course difficulty. Serialized exactly as the dashboard sends it; any
/// other value is rejected at the deserialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

/// A course as accepted on create/update. Extends the blog-post shape with
/// catalog fields; `students` being `u32` makes negative counts
/// unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub instructor: String,
    pub duration: String,
    pub level: Level,
    pub students: u32,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_popular: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
}

impl CourseDraft {
    /// Checks the create/update requirements beyond what the types already
    /// enforce.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` naming the first empty field.
    pub fn validate(&self) -> Result<(), ServiceError> {
        require_non_empty("course", "title", &self.title)?;
        require_non_empty("course", "description", &self.description)?;
        require_non_empty("course", "image", &self.image)?;
        require_non_empty("course", "category", &self.category)?;
        require_non_empty("course", "instructor", &self.instructor)?;
        require_non_empty("course", "price", &self.price)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::parse_payload;

    fn valid_body() -> serde_json::Value {
        json!({
            "title": "Rust from Zero",
            "description": "A practical introduction",
            "image": "/rust.png",
            "category": "Programming",
            "instructor": "Liu Wen",
            "duration": "8 weeks",
            "level": "Beginner",
            "students": 120,
            "price": "$49",
            "features": ["Projects", "Certificate"]
        })
    }

    #[test]
    fn test_valid_course_passes() {
        let draft: CourseDraft = parse_payload("course", valid_body()).unwrap();
        assert!(draft.validate().is_ok());
        assert_eq!(draft.level, Level::Beginner);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let mut body = valid_body();
        body["level"] = json!("Expert");

        let err = parse_payload::<CourseDraft>("course", body).unwrap_err();
        match err {
            ServiceError::Validation(msg) => assert!(msg.contains("Expert")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_students_is_rejected() {
        let mut body = valid_body();
        body["students"] = json!(-1);

        assert!(matches!(
            parse_payload::<CourseDraft>("course", body),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_instructor_is_rejected() {
        let mut body = valid_body();
        body["instructor"] = json!("  ");

        let draft: CourseDraft = parse_payload("course", body).unwrap();
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("instructor"));
    }

    #[test]
    fn test_level_serializes_capitalized() {
        assert_eq!(
            serde_json::to_value(Level::Intermediate).unwrap(),
            json!("Intermediate")
        );
    }
}
