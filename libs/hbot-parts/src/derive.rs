//! Validation of derived dimensions.

use crate::error::{PartError, PartResult};

/// Checks that every `(name, value)` pair is finite and non-negative.
///
/// Generators call this once with all of their derived scalars, before any
/// geometry is built.
///
/// ## Example
///
/// ```rust
/// use hbot_parts::derive::ensure_dimensions;
///
/// assert!(ensure_dimensions("beltclamp", &[("hole_spacing", 11.5)]).is_ok());
/// assert!(ensure_dimensions("beltclamp", &[("hole_spacing", -1.0)]).is_err());
/// ```
pub fn ensure_dimensions(part: &'static str, values: &[(&'static str, f64)]) -> PartResult<()> {
    match values
        .iter()
        .find(|(_, value)| !(value.is_finite() && *value >= 0.0))
    {
        Some(&(name, value)) => Err(PartError::InvalidDimension { part, name, value }),
        None => Ok(()),
    }
}
