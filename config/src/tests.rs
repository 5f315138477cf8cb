//! # Tests for Config Constants
//!
//! Unit tests verifying the relationships between configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON_TOLERANCE > 0.0, "EPSILON_TOLERANCE must be positive");
}

#[test]
fn test_epsilon_is_far_below_printable_features() {
    assert!(
        EPSILON_TOLERANCE < RENDER_OFFSET / 1000.0,
        "tolerance must not be confused with a real offset"
    );
}

// =============================================================================
// CLEARANCE TESTS
// =============================================================================

#[test]
fn test_clearances_are_positive() {
    assert!(RENDER_OFFSET > 0.0);
    assert!(NUT_TRAP_MARGIN > 0.0);
    assert!(ROD_CLEARANCE > 0.0);
    assert!(PRESS_FIT_TOLERANCE > 0.0);
    assert!(PRESS_FIT_TOLERANCE < ROD_CLEARANCE);
}

#[test]
fn test_rod_clearance_exceeds_render_offset() {
    // A rod bore is a fit clearance, the render offset only avoids coplanar faces.
    assert!(ROD_CLEARANCE > RENDER_OFFSET);
}

// =============================================================================
// DRIVER DEFAULTS
// =============================================================================

#[test]
fn test_driver_defaults_are_not_empty() {
    assert!(!DEFAULT_OUTPUT_DIR.is_empty());
    assert!(!DEFAULT_COMPILER.is_empty());
    assert_eq!(SCENE_FILE_EXTENSION, "json");
}
