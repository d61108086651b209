//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - Window access, intersection observation, scroll listening
//! - [`timer`] - Interval timers with scoped cancellation

pub mod dom;
pub mod timer;
