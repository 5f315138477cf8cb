//! Centralized configuration values shared across the hbot workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION
// =============================================================================

/// Numerical tolerance used when comparing derived geometry.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// CLEARANCES
// =============================================================================

/// Distance a cutting operand is pushed past the face it cuts through.
///
/// Coplanar faces between a solid and its subtrahend render as paper-thin
/// skins in the downstream compiler, so every through-cut overshoots by this
/// amount on each side.
///
/// # Examples
/// ```
/// use config::constants::RENDER_OFFSET;
/// let plate = 4.8;
/// let through = plate + 2.0 * RENDER_OFFSET;
/// assert!((through - 5.0).abs() < 1e-9);
/// ```
pub const RENDER_OFFSET: f64 = 0.1;

/// Extra height given to a nut trap above the nut's own height.
///
/// # Examples
/// ```
/// use config::constants::NUT_TRAP_MARGIN;
/// let trap_height = 2.4 + NUT_TRAP_MARGIN;
/// assert!((trap_height - 2.5).abs() < 1e-9);
/// ```
pub const NUT_TRAP_MARGIN: f64 = 0.1;

/// Radial clearance between a smooth rod and the bore it passes through.
///
/// # Examples
/// ```
/// use config::constants::ROD_CLEARANCE;
/// let bore_radius = 8.0 / 2.0 + ROD_CLEARANCE;
/// assert_eq!(bore_radius, 4.5);
/// ```
pub const ROD_CLEARANCE: f64 = 0.5;

/// Radial clearance applied to screw holes so screws slide in freely.
///
/// # Examples
/// ```
/// use config::constants::SCREW_TOLERANCE;
/// assert!(SCREW_TOLERANCE > 0.0);
/// ```
pub const SCREW_TOLERANCE: f64 = 0.2;

/// Radial tolerance for bores a rod is pressed into.
///
/// # Examples
/// ```
/// use config::constants::{PRESS_FIT_TOLERANCE, SCREW_TOLERANCE};
/// assert!(PRESS_FIT_TOLERANCE < SCREW_TOLERANCE);
/// ```
pub const PRESS_FIT_TOLERANCE: f64 = 0.1;

// =============================================================================
// DRIVER DEFAULTS
// =============================================================================

/// Directory scene files are written to when no `--out` is given.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_OUTPUT_DIR;
/// assert!(DEFAULT_OUTPUT_DIR.ends_with("json"));
/// ```
pub const DEFAULT_OUTPUT_DIR: &str = "./json";

/// External program launched against every written scene file.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_COMPILER;
/// assert_eq!(DEFAULT_COMPILER, "textcad");
/// ```
pub const DEFAULT_COMPILER: &str = "textcad";

/// File extension used for scene files.
///
/// # Examples
/// ```
/// use config::constants::SCENE_FILE_EXTENSION;
/// let file = format!("xcarriage.{SCENE_FILE_EXTENSION}");
/// assert_eq!(file, "xcarriage.json");
/// ```
pub const SCENE_FILE_EXTENSION: &str = "json";

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of the clearance settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance used for overlap tests.
    pub tolerance: f64,
    /// Overshoot applied to through-cuts.
    pub render_offset: f64,
    /// Radial clearance for smooth rods.
    pub rod_clearance: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 0.2, 0.4).expect("valid config");
    /// assert_eq!(cfg.render_offset, 0.2);
    /// ```
    pub fn new(tolerance: f64, render_offset: f64, rod_clearance: f64) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(render_offset > tolerance) {
            return Err(ConfigError::InvalidRenderOffset(render_offset));
        }
        if !(rod_clearance >= 0.0) {
            return Err(ConfigError::InvalidClearance(rod_clearance));
        }
        Ok(Self {
            tolerance,
            render_offset,
            rod_clearance,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            render_offset: RENDER_OFFSET,
            rod_clearance: ROD_CLEARANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when the render offset does not exceed the tolerance.
    InvalidRenderOffset(f64),
    /// Raised when a clearance is negative or NaN.
    InvalidClearance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidRenderOffset(value) => {
                write!(f, "render_offset must exceed the tolerance: {value}")
            }
            ConfigError::InvalidClearance(value) => {
                write!(f, "clearance must be non-negative: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
