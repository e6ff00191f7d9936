//! Partial updates to the content aggregate.
//!
//! A patch carries a subset of section keys, each given in full. Applying a
//! patch replaces exactly the sections present and leaves every other
//! section untouched. Callers must send the complete section — there is no
//! deep merge below the section level.

use memi_core::error::ServiceError;
use serde::Deserialize;
use serde_json::Value;

use crate::model::{
    BenefitsSection, FeaturedCoursesSection, FeaturesSection, FooterSection, GetInvolvedSection,
    HeroSection, HomeContent, PricingSection, SECTION_NAMES, SupportSection, TeamSection,
    TestimonialSection, TrustedBrandsSection,
};

/// A validated partial update: one optional slot per section.
#[derive(Debug, Clone, Default)]
pub struct HomeContentPatch {
    pub hero: Option<HeroSection>,
    pub support: Option<SupportSection>,
    pub features: Option<FeaturesSection>,
    pub benefits: Option<BenefitsSection>,
    pub pricing: Option<PricingSection>,
    pub testimonial: Option<TestimonialSection>,
    pub featured_courses: Option<FeaturedCoursesSection>,
    pub get_involved: Option<GetInvolvedSection>,
    pub team: Option<TeamSection>,
    pub footer: Option<FooterSection>,
    pub trusted_brands: Option<TrustedBrandsSection>,
}

fn section<T: for<'de> Deserialize<'de>>(name: &str, value: Value) -> Result<T, ServiceError> {
    if !value.is_object() {
        return Err(ServiceError::Validation(format!(
            "section '{name}' must be an object"
        )));
    }
    serde_json::from_value(value)
        .map_err(|e| ServiceError::Validation(format!("section '{name}' is malformed: {e}")))
}

impl HomeContentPatch {
    /// Parses a raw JSON body into a patch.
    ///
    /// # Errors
    ///
    /// - `ServiceError::Validation` if the body is not a JSON object, or a
    ///   provided section is not an object or fails its shape check.
    /// - `ServiceError::UnknownSection` for any top-level key that is not a
    ///   recognized section name. Unknown keys are rejected, never ignored.
    pub fn from_value(value: Value) -> Result<Self, ServiceError> {
        let Value::Object(map) = value else {
            return Err(ServiceError::Validation(
                "partial update body must be a JSON object of sections".to_owned(),
            ));
        };

        let mut patch = Self::default();
        for (key, section_value) in map {
            if !SECTION_NAMES.contains(&key.as_str()) {
                return Err(ServiceError::UnknownSection(key));
            }
            match key.as_str() {
                "hero" => patch.hero = Some(section(&key, section_value)?),
                "support" => patch.support = Some(section(&key, section_value)?),
                "features" => patch.features = Some(section(&key, section_value)?),
                "benefits" => patch.benefits = Some(section(&key, section_value)?),
                "pricing" => patch.pricing = Some(section(&key, section_value)?),
                "testimonial" => patch.testimonial = Some(section(&key, section_value)?),
                "featuredCourses" => {
                    patch.featured_courses = Some(section(&key, section_value)?);
                }
                "getInvolved" => patch.get_involved = Some(section(&key, section_value)?),
                "team" => patch.team = Some(section(&key, section_value)?),
                "footer" => patch.footer = Some(section(&key, section_value)?),
                "trustedBrands" => patch.trusted_brands = Some(section(&key, section_value)?),
                _ => unreachable!("key checked against SECTION_NAMES"),
            }
        }
        Ok(patch)
    }

    /// Checks cross-field invariants on every section present in the patch.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` on the first violated invariant
    /// (currently the image alt-text rule).
    pub fn validate(&self) -> Result<(), ServiceError> {
        if let Some(hero) = &self.hero {
            hero.validate()?;
        }
        if let Some(features) = &self.features {
            features.validate()?;
        }
        if let Some(benefits) = &self.benefits {
            benefits.validate()?;
        }
        if let Some(testimonial) = &self.testimonial {
            testimonial.validate()?;
        }
        if let Some(get_involved) = &self.get_involved {
            get_involved.validate()?;
        }
        if let Some(team) = &self.team {
            team.validate()?;
        }
        if let Some(trusted_brands) = &self.trusted_brands {
            trusted_brands.validate()?;
        }
        Ok(())
    }

    /// Replaces each section present in the patch on `content`, in full.
    pub fn apply_to(self, content: &mut HomeContent) {
        if let Some(hero) = self.hero {
            content.hero = hero;
        }
        if let Some(support) = self.support {
            content.support = support;
        }
        if let Some(features) = self.features {
            content.features = features;
        }
        if let Some(benefits) = self.benefits {
            content.benefits = benefits;
        }
        if let Some(pricing) = self.pricing {
            content.pricing = pricing;
        }
        if let Some(testimonial) = self.testimonial {
            content.testimonial = testimonial;
        }
        if let Some(featured_courses) = self.featured_courses {
            content.featured_courses = featured_courses;
        }
        if let Some(get_involved) = self.get_involved {
            content.get_involved = get_involved;
        }
        if let Some(team) = self.team {
            content.team = team;
        }
        if let Some(footer) = self.footer {
            content.footer = footer;
        }
        if let Some(trusted_brands) = self.trusted_brands {
            content.trusted_brands = Some(trusted_brands);
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::defaults;

    #[test]
    fn test_unknown_top_level_key_is_rejected() {
        let body = json!({ "heroSection": { "title": "x" } });

        let err = HomeContentPatch::from_value(body).unwrap_err();
        match err {
            ServiceError::UnknownSection(key) => assert_eq!(key, "heroSection"),
            other => panic!("expected UnknownSection, got {other:?}"),
        }
    }

    #[test]
    fn test_non_object_section_is_rejected() {
        let body = json!({ "hero": "not an object" });

        let err = HomeContentPatch::from_value(body).unwrap_err();
        match err {
            ServiceError::Validation(msg) => assert!(msg.contains("hero")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_null_section_is_rejected() {
        let body = json!({ "footer": null });

        assert!(matches!(
            HomeContentPatch::from_value(body),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        let err = HomeContentPatch::from_value(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn test_empty_patch_is_a_no_op() {
        let mut content = defaults::seed();
        let before = content.clone();

        let patch = HomeContentPatch::from_value(json!({})).unwrap();
        patch.apply_to(&mut content);

        assert_eq!(content, before);
    }

    #[test]
    fn test_apply_replaces_only_present_sections() {
        let mut content = defaults::seed();
        let footer_before = content.footer.clone();

        let mut hero = serde_json::to_value(&content.hero).unwrap();
        hero["title"] = json!("New headline");
        let patch = HomeContentPatch::from_value(json!({ "hero": hero })).unwrap();
        patch.apply_to(&mut content);

        assert_eq!(content.hero.title, "New headline");
        assert_eq!(content.footer, footer_before);
    }

    #[test]
    fn test_malformed_section_shape_is_rejected() {
        // Pricing plans must be objects, not strings.
        let body = json!({ "pricing": { "title": "t", "subtitle": "s", "plans": ["basic"] } });

        let err = HomeContentPatch::from_value(body).unwrap_err();
        match err {
            ServiceError::Validation(msg) => assert!(msg.contains("pricing")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
