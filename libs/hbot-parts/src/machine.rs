//! # Machine Configuration
//!
//! Hardware choices and settings shared by every part of one machine.
//! The defaults describe the stock build.

use config::constants::{GlobalConfig, EPSILON_TOLERANCE, RENDER_OFFSET, ROD_CLEARANCE};
use serde::{Deserialize, Serialize};

use crate::error::PartResult;

/// Machine-wide part settings.
///
/// Missing keys fall back to the stock machine when deserialized.
///
/// ## Example
///
/// ```rust
/// use hbot_parts::MachineConfig;
///
/// let machine: MachineConfig = serde_json::from_str(r#"{ "rod_spacing": 50 }"#).unwrap();
/// assert_eq!(machine.rod_spacing, 50.0);
/// assert_eq!(machine.linear_bearing, "LM8UU");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MachineConfig {
    /// Stepper size name.
    pub stepper: String,
    /// Linear bearing size name.
    pub linear_bearing: String,
    /// Screw and nut size name.
    pub screw: String,
    /// Centre distance between the two X rods.
    pub rod_spacing: f64,
    pub zip_tie_width: f64,
    pub zip_tie_height: f64,
    /// Belt size name.
    pub belt: String,
    /// Radial bearing used as a belt idler.
    pub idler_bearing: String,
    /// Diameter of the Y rods held by the rod mounts.
    pub rod_diameter: f64,
    /// Length of the Y-rod mounts along the rod.
    pub mount_length: f64,
    /// Vertical distance between the two belt runs.
    pub belt_separation: f64,
    /// Diameter of the frame screw holes in the mount flanges.
    pub mount_hole_diameter: f64,
    /// Overshoot applied to through-cuts.
    pub render_offset: f64,
    /// Radial clearance between smooth rods and their bores.
    pub rod_clearance: f64,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            stepper: "GenericNEMA17".to_string(),
            linear_bearing: "LM8UU".to_string(),
            screw: "M3".to_string(),
            rod_spacing: 45.0,
            zip_tie_width: 5.0,
            zip_tie_height: 2.0,
            belt: "GT2".to_string(),
            idler_bearing: "623".to_string(),
            rod_diameter: 8.0,
            mount_length: 38.0,
            belt_separation: 16.0,
            mount_hole_diameter: 3.5,
            render_offset: RENDER_OFFSET,
            rod_clearance: ROD_CLEARANCE,
        }
    }
}

impl MachineConfig {
    /// Validated clearance settings.
    pub fn clearance(&self) -> PartResult<GlobalConfig> {
        Ok(GlobalConfig::new(
            EPSILON_TOLERANCE,
            self.render_offset,
            self.rod_clearance,
        )?)
    }
}
