//! Entrance animation classes for scroll-revealed elements.
//!
//! Elements start offset and transparent according to their [`Motion`] and
//! transition to their resting place once the owning section reveals.

stylance::import_crate_style!(css, "src/components/reveal.module.css");

/// Pre-reveal offset of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    FromLeft,
    FromRight,
    FromBelow,
    /// Longer travel, used for grid cards.
    FromFarBelow,
    /// Scaled down and transparent.
    Zoom,
    /// Scaled up, opacity untouched (background images).
    ZoomOut,
}

impl Motion {
    fn class(self) -> &'static str {
        match self {
            Self::FromLeft => css::fromLeft,
            Self::FromRight => css::fromRight,
            Self::FromBelow => css::fromBelow,
            Self::FromFarBelow => css::fromFarBelow,
            Self::Zoom => css::zoom,
            Self::ZoomOut => css::zoomOut,
        }
    }
}

/// Class list for an element of a revealing section.
pub fn reveal_class(base: &str, motion: Motion, revealed: bool) -> String {
    stylance::classes!(
        base,
        css::animated,
        motion.class(),
        revealed.then_some(css::revealed)
    )
}
