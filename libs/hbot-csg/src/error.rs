//! # Error Types
//!
//! Error types for geometry construction and scene export.
//!
//! ## Error Policy
//!
//! - Negative or non-finite sizes are rejected at construction time
//! - Nothing degrades silently into malformed geometry

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or exporting geometry.
#[derive(Error, Debug)]
pub enum CsgError {
    /// A size parameter was negative, NaN or infinite.
    #[error("invalid dimension for {what}: {value}")]
    InvalidDimension {
        /// Name of the offending parameter.
        what: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A regular prism needs at least three sides.
    #[error("n-gon prism needs at least 3 sides, got {0}")]
    TooFewSides(u32),

    /// Scene serialization failed.
    #[error("scene serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing a scene file failed.
    #[error("failed to write scene file: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for geometry operations.
pub type CsgResult<T> = Result<T, CsgError>;

/// Returns `value` when it is finite and non-negative.
///
/// ## Example
///
/// ```rust
/// use hbot_csg::error::ensure_dimension;
///
/// assert!(ensure_dimension("radius", 2.0).is_ok());
/// assert!(ensure_dimension("radius", -2.0).is_err());
/// ```
pub fn ensure_dimension(what: &'static str, value: f64) -> CsgResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CsgError::InvalidDimension { what, value })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CsgError::InvalidDimension {
            what: "height",
            value: -1.0,
        };
        assert!(err.to_string().contains("height"));
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_ensure_dimension_rejects_non_finite() {
        assert!(ensure_dimension("radius", f64::NAN).is_err());
        assert!(ensure_dimension("radius", f64::INFINITY).is_err());
        assert_eq!(ensure_dimension("radius", 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CsgError>();
    }
}
