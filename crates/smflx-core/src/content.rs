//! Static page content.
//!
//! All copy and asset references for the landing page live in one TOML
//! document, embedded by the web crate and parsed once at startup. The types
//! mirror the page sections in render order.

use serde::Deserialize;

use crate::error::ContentError;

/// Complete content for the landing page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageContent {
    pub brand: Brand,
    pub nav: NavContent,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub vehicle: VehicleContent,
    pub ministries: MinistriesContent,
    pub cta: CallToAction,
    pub resources: ResourcesContent,
    pub footer: FooterContent,
}

impl PageContent {
    /// Parse a content document.
    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        Ok(toml::from_str(source)?)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Brand {
    pub name: String,
    pub logo: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavContent {
    pub links: Vec<NavLink>,
    pub contact_label: String,
}

/// In-page anchor link, e.g. `#about`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeroContent {
    pub cta_label: String,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

/// One hero carousel entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Slide {
    pub title: String,
    pub description: String,
    pub image: String,
}

/// Heading split into a plain lead and an emphasized tail.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Heading {
    pub lead: String,
    pub emphasis: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AboutContent {
    pub eyebrow: String,
    pub heading: Heading,
    pub lead: String,
    pub body: String,
    pub image: String,
    pub image_alt: String,
    pub quote: String,
    pub cta_label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VehicleContent {
    pub eyebrow: String,
    pub heading: Heading,
    pub body: String,
    pub quote: String,
    pub image: String,
    pub inset_image: String,
    pub cta_label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MinistriesContent {
    pub eyebrow: String,
    pub heading: Heading,
    pub intro: String,
    #[serde(default)]
    pub cards: Vec<MinistryCard>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MinistryCard {
    pub title: String,
    pub tag: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CallToAction {
    pub background: String,
    pub heading: Heading,
    pub primary_label: String,
    pub secondary_label: String,
    pub testimonial: String,
    #[serde(default)]
    pub partner_avatars: Vec<String>,
    pub partner_count: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourcesContent {
    pub intro: String,
    pub heading: Heading,
    #[serde(default)]
    pub items: Vec<ResourceItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceItem {
    pub title: String,
    pub icon: ResourceIcon,
    pub gradient: Gradient,
    pub height_px: u32,
}

impl ResourceItem {
    /// Inline style for the card background and height.
    pub fn style(&self) -> String {
        format!(
            "background-image: linear-gradient(to top, {}, {}); height: {}px;",
            self.gradient.from, self.gradient.to, self.height_px
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceIcon {
    Microphone,
    Book,
    Image,
    Play,
}

/// Bottom-to-top color ramp.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Gradient {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FooterContent {
    pub blurb: String,
    pub headline_muted: String,
    pub headline: String,
    pub contact_heading: String,
    pub contact: Contact,
    #[serde(default)]
    pub socials: Vec<Social>,
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contact {
    pub address: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Social {
    Instagram,
    Facebook,
    Twitter,
    Linkedin,
}

impl Social {
    pub fn label(self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::Linkedin => "LinkedIn",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUNDLED: &str = include_str!("../../../assets/content/page.toml");

    #[test]
    fn test_bundled_content_parses() {
        let page = PageContent::from_toml(BUNDLED).expect("bundled content must parse");

        assert_eq!(page.brand.name, "SMFLX");
        assert_eq!(page.nav.links.len(), 4);
        assert_eq!(page.hero.slides.len(), 3);
        assert_eq!(page.ministries.cards.len(), 4);
        assert_eq!(page.resources.items.len(), 4);
        assert_eq!(page.cta.partner_avatars.len(), 4);
        assert_eq!(page.footer.socials.len(), 4);
    }

    #[test]
    fn test_bundled_nav_links_are_anchors() {
        let page = PageContent::from_toml(BUNDLED).unwrap();
        let hrefs: Vec<_> = page.nav.links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, vec!["#about", "#resources", "#articles", "#events"]);
    }

    #[test]
    fn test_bundled_slide_order() {
        let page = PageContent::from_toml(BUNDLED).unwrap();
        let titles: Vec<_> = page.hero.slides.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Being Single Eyed", "Marriage Xpression", "A Godly Family Life"]
        );
    }

    #[test]
    fn test_malformed_content_is_error() {
        let err = PageContent::from_toml("brand = 3").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
        assert!(err.to_string().starts_with("invalid page content"));
    }

    #[test]
    fn test_resource_icon_names() {
        #[derive(Deserialize)]
        struct Probe {
            icon: ResourceIcon,
        }
        let probe: Probe = toml::from_str(r#"icon = "microphone""#).unwrap();
        assert_eq!(probe.icon, ResourceIcon::Microphone);
        assert!(toml::from_str::<Probe>(r#"icon = "trumpet""#).is_err());
    }

    #[test]
    fn test_resource_item_style() {
        let item = ResourceItem {
            title: "Gallery".to_string(),
            icon: ResourceIcon::Image,
            gradient: Gradient {
                from: "#48c3b5".to_string(),
                to: "#3170b7".to_string(),
            },
            height_px: 380,
        };
        assert_eq!(
            item.style(),
            "background-image: linear-gradient(to top, #48c3b5, #3170b7); height: 380px;"
        );
    }

    #[test]
    fn test_social_labels() {
        assert_eq!(Social::Linkedin.label(), "LinkedIn");
    }
}
