//! Seed content for a fresh deployment.
//!
//! A store that has never been written must still serve a fully-populated
//! aggregate, so every section here carries real default copy.

use crate::model::{
    BenefitsSection, CtaButton, FeatureItem, FeaturedCoursesSection, FeaturesSection,
    FooterColumn, FooterLink, FooterSection, GetInvolvedSection, HeroSection, HomeContent,
    ImageRef, InvolvementOption, PricingPlan, PricingSection, SocialLink, SupportChannel,
    SupportSection, TeamMember, TeamSection, TestimonialSection,
};

fn placeholder(fallback: &str) -> ImageRef {
    ImageRef {
        src: None,
        alt: String::new(),
        fallback: Some(fallback.to_owned()),
    }
}

/// Builds the default aggregate used to seed a fresh store.
#[must_use]
pub fn seed() -> HomeContent {
    HomeContent {
        hero: HeroSection {
            title: "Learn without limits with MEMi".to_owned(),
            subtitle: "Courses, mentoring and community for lifelong learners.".to_owned(),
            cta_buttons: vec![
                CtaButton {
                    label: "Browse courses".to_owned(),
                    href: "/courses".to_owned(),
                    variant: Some("primary".to_owned()),
                },
                CtaButton {
                    label: "Contact us".to_owned(),
                    href: "/contact".to_owned(),
                    variant: Some("outline".to_owned()),
                },
            ],
            badges: vec!["Trusted by 10,000+ learners".to_owned()],
            image: placeholder("🎓"),
        },
        support: SupportSection {
            title: "We are here to help".to_owned(),
            subtitle: "Reach the MEMi team any time.".to_owned(),
            channels: vec![
                SupportChannel {
                    label: "Email".to_owned(),
                    value: "support@memi.example".to_owned(),
                    icon: Some("mail".to_owned()),
                },
                SupportChannel {
                    label: "Phone".to_owned(),
                    value: "+1 (555) 010-0199".to_owned(),
                    icon: Some("phone".to_owned()),
                },
            ],
        },
        features: FeaturesSection {
            title: "Everything you need to learn".to_owned(),
            subtitle: "Tools that keep you moving forward.".to_owned(),
            features: vec![
                FeatureItem {
                    title: "Expert-led courses".to_owned(),
                    description: "Curriculum designed and taught by practitioners.".to_owned(),
                    image: placeholder("📚"),
                },
                FeatureItem {
                    title: "Live mentoring".to_owned(),
                    description: "Weekly sessions with dedicated mentors.".to_owned(),
                    image: placeholder("🧑‍🏫"),
                },
                FeatureItem {
                    title: "Certificates".to_owned(),
                    description: "Shareable proof of every completed course.".to_owned(),
                    image: placeholder("📜"),
                },
            ],
        },
        benefits: BenefitsSection {
            title: "Why learners choose MEMi".to_owned(),
            subtitle: "Outcomes, not just content.".to_owned(),
            benefits: vec![
                FeatureItem {
                    title: "Learn at your own pace".to_owned(),
                    description: "Lifetime access to every enrolled course.".to_owned(),
                    image: placeholder("⏱️"),
                },
                FeatureItem {
                    title: "Community support".to_owned(),
                    description: "Study groups and forums for every cohort.".to_owned(),
                    image: placeholder("🤝"),
                },
            ],
        },
        pricing: PricingSection {
            title: "Simple pricing".to_owned(),
            subtitle: "Start free, upgrade when you are ready.".to_owned(),
            plans: vec![
                PricingPlan {
                    name: "Starter".to_owned(),
                    price: "$0".to_owned(),
                    period: "forever".to_owned(),
                    features: vec![
                        "Access to free courses".to_owned(),
                        "Community forums".to_owned(),
                    ],
                    is_popular: false,
                    cta_label: "Get started".to_owned(),
                },
                PricingPlan {
                    name: "Pro".to_owned(),
                    price: "$29".to_owned(),
                    period: "per month".to_owned(),
                    features: vec![
                        "All courses".to_owned(),
                        "Live mentoring".to_owned(),
                        "Certificates".to_owned(),
                    ],
                    is_popular: true,
                    cta_label: "Go Pro".to_owned(),
                },
            ],
        },
        testimonial: TestimonialSection {
            quote: "MEMi turned my evenings into a new career.".to_owned(),
            author: "Jordan Rivera".to_owned(),
            role: "Frontend Developer".to_owned(),
            image: placeholder("💬"),
        },
        featured_courses: FeaturedCoursesSection {
            title: "Featured courses".to_owned(),
            subtitle: "Hand-picked by our instructors.".to_owned(),
            course_ids: Vec::new(),
        },
        get_involved: GetInvolvedSection {
            title: "Get involved".to_owned(),
            subtitle: "MEMi grows with its community.".to_owned(),
            involvement_options: vec![
                InvolvementOption {
                    title: "Become a mentor".to_owned(),
                    description: "Share your experience with the next cohort.".to_owned(),
                    image: placeholder("🧭"),
                    cta_label: "Apply".to_owned(),
                    cta_href: "/mentors/apply".to_owned(),
                },
                InvolvementOption {
                    title: "Partner with us".to_owned(),
                    description: "Bring MEMi training to your organization.".to_owned(),
                    image: placeholder("🏢"),
                    cta_label: "Partner".to_owned(),
                    cta_href: "/partners".to_owned(),
                },
            ],
        },
        team: TeamSection {
            title: "Meet the team".to_owned(),
            subtitle: "The people behind MEMi.".to_owned(),
            team: vec![
                TeamMember {
                    name: "Amara Osei".to_owned(),
                    role: "Founder & CEO".to_owned(),
                    bio: "Former teacher building the school she wished existed.".to_owned(),
                    image: placeholder("👩‍💼"),
                },
                TeamMember {
                    name: "Liu Wen".to_owned(),
                    role: "Head of Curriculum".to_owned(),
                    bio: "Fifteen years of course design across three continents.".to_owned(),
                    image: placeholder("👨‍🏫"),
                },
            ],
        },
        footer: FooterSection {
            tagline: "Learning that fits your life.".to_owned(),
            copyright: "© 2026 MEMi. All rights reserved.".to_owned(),
            social_links: vec![
                SocialLink {
                    platform: "twitter".to_owned(),
                    href: "https://twitter.com/memi".to_owned(),
                },
                SocialLink {
                    platform: "linkedin".to_owned(),
                    href: "https://linkedin.com/company/memi".to_owned(),
                },
            ],
            columns: vec![
                FooterColumn {
                    title: "Product".to_owned(),
                    links: vec![
                        FooterLink {
                            label: "Courses".to_owned(),
                            href: "/courses".to_owned(),
                        },
                        FooterLink {
                            label: "Pricing".to_owned(),
                            href: "/#pricing".to_owned(),
                        },
                    ],
                },
                FooterColumn {
                    title: "Company".to_owned(),
                    links: vec![
                        FooterLink {
                            label: "Blog".to_owned(),
                            href: "/blog".to_owned(),
                        },
                        FooterLink {
                            label: "Contact".to_owned(),
                            href: "/contact".to_owned(),
                        },
                    ],
                },
            ],
        },
        trusted_brands: None,
    }
}

#[cfg(test)]
mod tests {
    use super::seed;

    #[test]
    fn test_seed_has_no_empty_required_copy() {
        let content = seed();

        assert!(!content.hero.title.is_empty());
        assert!(!content.hero.cta_buttons.is_empty());
        assert!(!content.features.features.is_empty());
        assert!(!content.pricing.plans.is_empty());
        assert!(!content.team.team.is_empty());
        assert!(!content.footer.copyright.is_empty());
    }

    #[test]
    fn test_seed_serializes_every_required_section() {
        let json = serde_json::to_value(seed()).unwrap();

        for name in [
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
        ] {
            assert!(json.get(name).is_some_and(|v| v.is_object()), "{name}");
        }
    }
}
