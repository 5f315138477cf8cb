//! # Motor Mount
//!
//! Upright plate carrying the belt stepper, joined to a Y-rod mount on its
//! +X side so the rod axis sits level with the motor shaft.
//!
//! The motor bolts to the -Y face of the plate and its pulley turns in front
//! of the +Y face, so the embedded rod mount starts its encasement behind
//! the pulley and both belt runs.

use std::f64::consts::SQRT_2;

use glam::DVec3;
use hbot_catalog::{Catalog, Screw, Stepper};
use hbot_csg::Node;
use tracing::debug;

use config::constants::{GlobalConfig, SCREW_TOLERANCE};

use crate::derive::ensure_dimensions;
use crate::error::PartResult;
use crate::machine::MachineConfig;
use crate::part::{Part, PartKind};
use crate::parts::rod_mount::{YRodMount, YRodMountConfig};
use crate::solids::{cube, hole};

const NAME: &str = "motormount";

/// Settings for [`MotorMount`].
#[derive(Debug, Clone, PartialEq)]
pub struct MotorMountConfig {
    pub stepper: String,
    pub belt: String,
    pub rod_diameter: f64,
    pub mount_length: f64,
    pub belt_separation: f64,
    pub hole_diameter: f64,
    pub clearance: GlobalConfig,
}

impl Default for MotorMountConfig {
    fn default() -> Self {
        let rod_mount = YRodMountConfig::default();
        Self {
            stepper: rod_mount.stepper,
            belt: rod_mount.belt,
            rod_diameter: rod_mount.rod_diameter,
            mount_length: rod_mount.mount_length,
            belt_separation: rod_mount.belt_separation,
            hole_diameter: rod_mount.hole_diameter,
            clearance: rod_mount.clearance,
        }
    }
}

impl MotorMountConfig {
    pub fn from_machine(machine: &MachineConfig) -> PartResult<Self> {
        let rod_mount = YRodMountConfig::from_machine(machine)?;
        Ok(Self {
            stepper: rod_mount.stepper,
            belt: rod_mount.belt,
            rod_diameter: rod_mount.rod_diameter,
            mount_length: rod_mount.mount_length,
            belt_separation: rod_mount.belt_separation,
            hole_diameter: rod_mount.hole_diameter,
            clearance: rod_mount.clearance,
        })
    }

    pub(crate) fn rod_mount(&self) -> YRodMountConfig {
        YRodMountConfig {
            rod_diameter: self.rod_diameter,
            mount_length: self.mount_length,
            stepper: self.stepper.clone(),
            belt: self.belt.clone(),
            belt_separation: self.belt_separation,
            hole_diameter: self.hole_diameter,
            encasement_start: None,
            clearance: self.clearance,
        }
    }
}

/// Stepper plate with an attached Y-rod mount.
#[derive(Debug, Clone)]
pub struct MotorMount {
    pub stepper: Stepper,
    /// Screw size named by the stepper's mounting holes.
    pub motor_screw: Screw,
    pub rod_mount: YRodMount,
    pub plate_thickness: f64,
    construction: Node,
}

impl MotorMount {
    pub fn new(catalog: &dyn Catalog, config: &MotorMountConfig) -> PartResult<Self> {
        let mut rod_mount = YRodMount::new(catalog, &config.rod_mount())?;
        let stepper = rod_mount.stepper.clone();
        let motor_screw = catalog.screw(&stepper.screw_size)?;

        let plate_thickness = motor_screw.head_height * 2.0;
        let encasement_start = plate_thickness + stepper.boss_height + config.belt_separation;
        let screw_margin =
            (stepper.width - stepper.hole_spacing) / 2.0 - motor_screw.head_diameter / 2.0;
        let boss_margin = stepper.hole_spacing * SQRT_2 / 2.0
            - stepper.boss_diameter / 2.0
            - motor_screw.outer_diameter / 2.0;
        // Rod mount pocket, validated under this part's name.
        let pocket_depth = config.mount_length - encasement_start - rod_mount.wall;

        ensure_dimensions(
            NAME,
            &[
                ("plate_thickness", plate_thickness),
                ("encasement_start", encasement_start),
                ("screw_margin", screw_margin),
                ("boss_margin", boss_margin),
                ("pocket_depth", pocket_depth),
            ],
        )?;
        debug!(part = NAME, plate_thickness, encasement_start, "derived motor mount");

        rod_mount.set_encasement_start(encasement_start);
        rod_mount.update()?;

        let mut mount = Self {
            stepper,
            motor_screw,
            rod_mount,
            plate_thickness,
            construction: Node::union([]),
        };
        mount.construction = mount.construct(config)?;
        Ok(mount)
    }

    /// Motor screw axes on the plate face, before the plate is cut.
    pub fn motor_holes(&self) -> [DVec3; 4] {
        let center = self.stepper.width / 2.0;
        let half = self.stepper.hole_spacing / 2.0;
        [
            DVec3::new(center - half, 0.0, center - half),
            DVec3::new(center + half, 0.0, center - half),
            DVec3::new(center - half, 0.0, center + half),
            DVec3::new(center + half, 0.0, center + half),
        ]
    }

    fn construct(&self, config: &MotorMountConfig) -> PartResult<Node> {
        let offset = config.clearance.render_offset;
        let width = self.stepper.width;
        let center = width / 2.0;
        let through = self.plate_thickness + 2.0 * offset;

        let plate = cube(width, self.plate_thickness, width)?;
        let base = cube(width, config.mount_length, self.rod_mount.base_thickness)?;
        let rod_mount = self
            .rod_mount
            .construction()
            .clone()
            .translated(DVec3::new(width, 0.0, 0.0));
        let body = Node::union([plate, base, rod_mount]);

        let mut cuts = vec![hole(self.stepper.boss_diameter / 2.0, through, SCREW_TOLERANCE)?
            .rotated(DVec3::X, -90.0)
            .translated(DVec3::new(center, -offset, center))];
        for location in self.motor_holes() {
            cuts.push(
                hole(self.motor_screw.outer_diameter / 2.0, through, SCREW_TOLERANCE)?
                    .rotated(DVec3::X, -90.0)
                    .translated(location + DVec3::new(0.0, -offset, 0.0)),
            );
        }
        Ok(body.subtract_all(cuts))
    }
}

impl Part for MotorMount {
    fn name(&self) -> &'static str {
        PartKind::MotorMount.name()
    }

    fn construction(&self) -> &Node {
        &self.construction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hbot_catalog::StandardCatalog;

    use crate::error::PartError;

    fn stock() -> MotorMount {
        MotorMount::new(&StandardCatalog::builtin(), &MotorMountConfig::default()).unwrap()
    }

    #[test]
    fn test_rod_mount_encasement_moves_behind_pulley() {
        let mount = stock();
        assert_relative_eq!(mount.plate_thickness, 6.0);
        assert_relative_eq!(mount.rod_mount.encasement_start, 24.0);
        assert_relative_eq!(mount.rod_mount.pocket_depth, 10.0);
    }

    #[test]
    fn test_rod_axis_level_with_shaft() {
        let mount = stock();
        assert_relative_eq!(mount.rod_mount.rod_height, mount.stepper.width / 2.0);
    }

    #[test]
    fn test_plate_cuts() {
        let mount = stock();
        // boss and four motor screws
        assert_eq!(mount.construction().children().len(), 1 + 5);
        let bbox = mount.construction().bounding_box();
        assert_relative_eq!(bbox.max.x, 42.3 + mount.rod_mount.base_width, epsilon = 1e-9);
    }

    #[test]
    fn test_long_belt_separation_overruns_rod_mount() {
        let config = MotorMountConfig {
            belt_separation: 30.0,
            ..MotorMountConfig::default()
        };
        let err = MotorMount::new(&StandardCatalog::builtin(), &config).unwrap_err();
        assert!(matches!(
            err,
            PartError::InvalidDimension {
                part: "motormount",
                name: "pocket_depth",
                ..
            }
        ));
    }

    #[test]
    fn test_short_mount_fails_as_motor_mount() {
        // 26 mm suits a standalone rod mount but not one pushed behind the pulley.
        let config = MotorMountConfig {
            mount_length: 26.0,
            ..MotorMountConfig::default()
        };
        assert!(YRodMount::new(&StandardCatalog::builtin(), &config.rod_mount()).is_ok());

        let err = MotorMount::new(&StandardCatalog::builtin(), &config).unwrap_err();
        match err {
            PartError::InvalidDimension { part, name, value } => {
                assert_eq!(part, "motormount");
                assert_eq!(name, "pocket_depth");
                assert_relative_eq!(value, -2.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
