//! UI components built with Leptos.
//!
//! Page sections, in render order:
//! - [`navbar`] - Floating navigation bar with mobile overlay menu
//! - [`hero`] - Rotating hero carousel
//! - [`about`] - Ministry introduction
//! - [`vehicle`] - "Vehicle of change" story
//! - [`ministries`] - Ministry card grid
//! - [`cta`] - Call to action with partner testimonial
//! - [`resources`] - Resource tiles
//! - [`footer`] - Contact details and social links
//!
//! Shared pieces:
//! - [`hooks`] - Scroll reveal, carousel and navbar state
//! - [`reveal`] - Entrance motion classes
//! - [`common`] - Eyebrow labels and split headings
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`scroll_indicator`] - Fixed scroll cue

pub mod about;
pub mod common;
pub mod cta;
pub mod footer;
pub mod hero;
pub mod hooks;
pub mod icons;
pub mod ministries;
pub mod navbar;
pub mod resources;
pub mod reveal;
pub mod scroll_indicator;
pub mod vehicle;
