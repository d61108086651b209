//! Application configuration.
//!
//! Centralizes all tunables for the landing page. Page copy is loaded at
//! compile time using `include_str!`.

use smflx_core::{RevealFallback, Threshold, carousel, nav};

// =============================================================================
// Content (loaded at compile time)
// =============================================================================

/// Page copy and asset references.
pub const PAGE_CONTENT: &str = include_str!("../assets/content/page.toml");

/// Mount point in `index.html`.
pub const MOUNT_ID: &str = "app";

// =============================================================================
// Reveal Configuration
// =============================================================================

/// Visible fraction at which a section plays its entrance animation.
pub const REVEAL_THRESHOLD: Threshold = Threshold::DEFAULT;

/// Behaviour when the browser has no `IntersectionObserver`.
/// Sections still appear, just without waiting for scroll.
pub const REVEAL_FALLBACK: RevealFallback = RevealFallback::Reveal;

/// Per-card transition delays for staggered grids (milliseconds).
pub mod stagger {
    /// Ministry cards.
    pub const MINISTRY_STEP_MS: u32 = 150;
    /// Resource cards.
    pub const RESOURCE_STEP_MS: u32 = 100;
}

// =============================================================================
// Hero Carousel
// =============================================================================

/// Time each slide stays active (milliseconds).
pub const CAROUSEL_PERIOD_MS: u32 = carousel::DEFAULT_PERIOD_MS;

// =============================================================================
// Navbar
// =============================================================================

/// Scroll offset past which the navbar shrinks (pixels).
pub const NAV_SCROLL_THRESHOLD_PX: f64 = nav::DEFAULT_SCROLL_THRESHOLD_PX;

/// Breakpoint where inline links replace the overlay menu.
pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 1024px)";

#[cfg(test)]
mod tests {
    use super::*;
    use smflx_core::PageContent;

    #[test]
    fn test_bundled_content_loads() {
        let page = PageContent::from_toml(PAGE_CONTENT).expect("bundled content");
        assert_eq!(page.hero.slides.len(), 3);
    }

    #[test]
    fn test_stylesheet_bundle_generated_before_build() {
        let cargo: toml::Table = toml::from_str(include_str!("../Cargo.toml")).unwrap();
        let trunk: toml::Table = toml::from_str(include_str!("../Trunk.toml")).unwrap();
        let index = include_str!("../index.html");

        let bundle = cargo["package"]["metadata"]["stylance"]["output_file"]
            .as_str()
            .unwrap();
        assert!(index.contains(&format!(r#"rel="css" href="{}""#, bundle)));

        let hooks = trunk["hooks"].as_array().unwrap();
        assert!(hooks.iter().any(|hook| {
            hook["stage"].as_str() == Some("pre_build")
                && hook["command"].as_str() == Some("stylance")
        }));
        let ignored = trunk["watch"]["ignore"].as_array().unwrap();
        assert!(ignored.iter().any(|path| path.as_str() == Some(bundle)));
    }

    #[test]
    fn test_timing_defaults() {
        assert_eq!(CAROUSEL_PERIOD_MS, 6000);
        assert_eq!(NAV_SCROLL_THRESHOLD_PX, 50.0);
        assert_eq!(REVEAL_THRESHOLD.get(), 0.1);
        assert_eq!(REVEAL_FALLBACK, RevealFallback::Reveal);
    }
}
