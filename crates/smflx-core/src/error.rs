//! Error types for page state and content.
//!
//! - [`ThresholdError`] - Invalid reveal threshold fraction
//! - [`ContentError`] - Bundled page content could not be loaded

use thiserror::Error;

/// A reveal threshold outside `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ThresholdError {
    #[error("reveal threshold must be in (0, 1], got {0}")]
    OutOfRange(f64),
}

/// Errors raised while loading the page content document.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The TOML document is malformed or missing required fields.
    #[error("invalid page content: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_error_message() {
        let err = ThresholdError::OutOfRange(1.5);
        assert_eq!(err.to_string(), "reveal threshold must be in (0, 1], got 1.5");
    }
}
