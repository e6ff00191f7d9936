//! Section models for the home-page content aggregate.
//!
//! Wire format is camelCase JSON, matching what the dashboard editors send.
//! A section update is always a full replacement of the section value; there
//! is no deep merge below the section level.

use memi_core::error::ServiceError;
use serde::{Deserialize, Serialize};

/// An image reference carried by image-bearing entries.
///
/// `fallback` is a display placeholder (emoji or icon name) shown when `src`
/// is absent. Once `src` is set, `alt` must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    /// Image URL or data-URL. Editors may persist data-URL previews as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Alternative text. Required to be non-empty whenever `src` is set.
    #[serde(default)]
    pub alt: String,
    /// Placeholder shown when `src` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

impl ImageRef {
    /// Checks the alt-text invariant for this image.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` naming `context` if `src` is set
    /// but `alt` is empty.
    pub fn validate(&self, context: &str) -> Result<(), ServiceError> {
        if self.src.is_some() && self.alt.trim().is_empty() {
            return Err(ServiceError::Validation(format!(
                "{context}: image with src must have non-empty alt text"
            )));
        }
        Ok(())
    }
}

/// A call-to-action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaButton {
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// The hero banner section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub cta_buttons: Vec<CtaButton>,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub image: ImageRef,
}

/// One support contact channel (email, phone, chat, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportChannel {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// The support/contact strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportSection {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub channels: Vec<SupportChannel>,
}

/// An illustrated card used by the features and benefits sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: ImageRef,
}

/// The product features grid. Cards are edited by index; replacing the
/// whole `features` list is how entries are added or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesSection {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub features: Vec<FeatureItem>,
}

/// The benefits grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitsSection {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub benefits: Vec<FeatureItem>,
}

/// One pricing tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    pub period: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
    pub cta_label: String,
}

/// The pricing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSection {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub plans: Vec<PricingPlan>,
}

/// The single-quote testimonial block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialSection {
    pub quote: String,
    pub author: String,
    pub role: String,
    #[serde(default)]
    pub image: ImageRef,
}

/// The featured-courses carousel. Holds course ids only; course data lives
/// in the external catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedCoursesSection {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub course_ids: Vec<String>,
}

/// One way to get involved (volunteer, partner, donate, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvolvementOption {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: ImageRef,
    pub cta_label: String,
    pub cta_href: String,
}

/// The get-involved section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetInvolvedSection {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub involvement_options: Vec<InvolvementOption>,
}

/// One team member card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub image: ImageRef,
}

/// The team roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSection {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub team: Vec<TeamMember>,
}

/// One social media link in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: String,
    pub href: String,
}

/// One footer navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

/// One footer link column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterColumn {
    pub title: String,
    #[serde(default)]
    pub links: Vec<FooterLink>,
}

/// The site footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterSection {
    pub tagline: String,
    pub copyright: String,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub columns: Vec<FooterColumn>,
}

/// One trusted brand logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub name: String,
    #[serde(default)]
    pub image: ImageRef,
}

/// The trusted-brands strip. The only optional section of the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustedBrandsSection {
    pub title: String,
    #[serde(default)]
    pub brands: Vec<Brand>,
}

/// The home-page content aggregate: one record, independently-editable
/// named sections. The aggregate as a whole is the unit of storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    pub hero: HeroSection,
    pub support: SupportSection,
    pub features: FeaturesSection,
    pub benefits: BenefitsSection,
    pub pricing: PricingSection,
    pub testimonial: TestimonialSection,
    pub featured_courses: FeaturedCoursesSection,
    pub get_involved: GetInvolvedSection,
    pub team: TeamSection,
    pub footer: FooterSection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trusted_brands: Option<TrustedBrandsSection>,
}

/// The wire names of every recognized top-level section, in aggregate order.
pub const SECTION_NAMES: [&str; 11] = [
    "hero",
    "support",
    "features",
    "benefits",
    "pricing",
    "testimonial",
    "featuredCourses",
    "getInvolved",
    "team",
    "footer",
    "trustedBrands",
];

impl HeroSection {
    pub(crate) fn validate(&self) -> Result<(), ServiceError> {
        self.image.validate("hero.image")
    }
}

impl FeaturesSection {
    pub(crate) fn validate(&self) -> Result<(), ServiceError> {
        for (i, item) in self.features.iter().enumerate() {
            item.image.validate(&format!("features.features[{i}].image"))?;
        }
        Ok(())
    }
}

impl BenefitsSection {
    pub(crate) fn validate(&self) -> Result<(), ServiceError> {
        for (i, item) in self.benefits.iter().enumerate() {
            item.image.validate(&format!("benefits.benefits[{i}].image"))?;
        }
        Ok(())
    }
}

impl TestimonialSection {
    pub(crate) fn validate(&self) -> Result<(), ServiceError> {
        self.image.validate("testimonial.image")
    }
}

impl GetInvolvedSection {
    pub(crate) fn validate(&self) -> Result<(), ServiceError> {
        for (i, option) in self.involvement_options.iter().enumerate() {
            option
                .image
                .validate(&format!("getInvolved.involvementOptions[{i}].image"))?;
        }
        Ok(())
    }
}

impl TeamSection {
    pub(crate) fn validate(&self) -> Result<(), ServiceError> {
        for (i, member) in self.team.iter().enumerate() {
            member.image.validate(&format!("team.team[{i}].image"))?;
        }
        Ok(())
    }
}

impl TrustedBrandsSection {
    pub(crate) fn validate(&self) -> Result<(), ServiceError> {
        for (i, brand) in self.brands.iter().enumerate() {
            brand.image.validate(&format!("trustedBrands.brands[{i}].image"))?;
        }
        Ok(())
    }
}
