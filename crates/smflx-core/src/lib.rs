//! Platform-independent state for the SMFLX landing page.
//!
//! Everything here is plain data driven by discrete events, so it can be
//! exercised natively without a browser:
//!
//! - [`lifecycle`] - Scoped subscriptions with idempotent cancellation
//! - [`reveal`] - One-shot viewport reveal trigger
//! - [`carousel`] - Timer-driven rotating slide index
//! - [`nav`] - Navbar scroll and menu toggles
//! - [`motion`] - Stagger delays and title emphasis
//! - [`content`] - Static page copy loaded from TOML
//! - [`error`] - Error types

pub mod carousel;
pub mod content;
pub mod error;
pub mod lifecycle;
pub mod motion;
pub mod nav;
pub mod reveal;

pub use carousel::Carousel;
pub use content::PageContent;
pub use error::{ContentError, ThresholdError};
pub use lifecycle::{Liveness, Subscription};
pub use nav::{MenuState, ScrollState};
pub use reveal::{RevealFallback, RevealOutcome, RevealTrigger, Threshold};
