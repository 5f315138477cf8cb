//! # Drill Template
//!
//! Flat plate matching the footprint of the motor mount. The motor half
//! carries the stepper face pattern (four screws and the boss), the rod
//! mount half carries the flange screw positions. A lip along the -Y edge
//! hooks over the frame so the template registers against it.

use glam::DVec3;
use hbot_catalog::Catalog;
use hbot_csg::Node;
use tracing::debug;

use crate::derive::ensure_dimensions;
use crate::error::PartResult;
use crate::machine::MachineConfig;
use crate::part::{Part, PartKind};
use crate::parts::motor_mount::{MotorMount, MotorMountConfig};
use crate::solids::{cube, hole};

const NAME: &str = "drilltemplate";

/// Settings for [`DrillTemplate`].
#[derive(Debug, Clone, PartialEq)]
pub struct DrillTemplateConfig {
    /// Mount whose footprint is copied.
    pub motor_mount: MotorMountConfig,
    pub thickness: f64,
    pub lip_width: f64,
    /// How far the lip hangs below the plate.
    pub lip_depth: f64,
}

impl Default for DrillTemplateConfig {
    fn default() -> Self {
        Self {
            motor_mount: MotorMountConfig::default(),
            thickness: 3.0,
            lip_width: 3.0,
            lip_depth: 5.0,
        }
    }
}

impl DrillTemplateConfig {
    pub fn from_machine(machine: &MachineConfig) -> PartResult<Self> {
        Ok(Self {
            motor_mount: MotorMountConfig::from_machine(machine)?,
            ..Self::default()
        })
    }
}

/// Drilling guide for the motor mount screws.
#[derive(Debug, Clone)]
pub struct DrillTemplate {
    /// Extent along X, motor plate plus rod mount flange.
    pub length: f64,
    /// Extent along Y.
    pub depth: f64,
    pub thickness: f64,
    /// Stepper screw centres on the bed.
    pub motor_guides: [DVec3; 4],
    pub motor_guide_diameter: f64,
    pub boss_center: DVec3,
    pub boss_diameter: f64,
    /// Rod mount flange screw centres on the bed.
    pub rod_guides: [DVec3; 4],
    pub rod_guide_diameter: f64,
    construction: Node,
}

impl DrillTemplate {
    pub fn new(catalog: &dyn Catalog, config: &DrillTemplateConfig) -> PartResult<Self> {
        let mount = MotorMount::new(catalog, &config.motor_mount)?;
        let rod_mount = &mount.rod_mount;
        let motor_width = mount.stepper.width;

        let length = motor_width + rod_mount.base_width;
        let depth = motor_width.max(config.motor_mount.mount_length);
        let center = motor_width / 2.0;
        let half = mount.stepper.hole_spacing / 2.0;

        ensure_dimensions(
            NAME,
            &[
                ("length", length),
                ("depth", depth),
                ("thickness", config.thickness),
                ("lip_width", config.lip_width),
                ("lip_depth", config.lip_depth),
            ],
        )?;

        let motor_guides = [
            DVec3::new(center - half, center - half, 0.0),
            DVec3::new(center + half, center - half, 0.0),
            DVec3::new(center - half, center + half, 0.0),
            DVec3::new(center + half, center + half, 0.0),
        ];
        let shift = DVec3::new(motor_width, 0.0, 0.0);
        let rod_guides = rod_mount.base_holes().map(|location| location + shift);
        debug!(part = NAME, length, depth, "derived drill template");

        let mut template = Self {
            length,
            depth,
            thickness: config.thickness,
            motor_guides,
            motor_guide_diameter: mount.motor_screw.outer_diameter,
            boss_center: DVec3::new(center, center, 0.0),
            boss_diameter: mount.stepper.boss_diameter,
            rod_guides,
            rod_guide_diameter: config.motor_mount.hole_diameter,
            construction: Node::union([]),
        };
        template.construction = template.construct(config)?;
        Ok(template)
    }

    fn construct(&self, config: &DrillTemplateConfig) -> PartResult<Node> {
        let offset = config.motor_mount.clearance.render_offset;

        let plate = cube(self.length, self.depth, self.thickness)?;
        let lip = cube(self.length, config.lip_width, self.thickness + config.lip_depth)?
            .translated(DVec3::new(0.0, -config.lip_width, -config.lip_depth));
        let body = Node::union([plate, lip]);

        let through = self.thickness + 2.0 * offset;
        let below = DVec3::new(0.0, 0.0, -offset);
        let guide = |diameter: f64, location: DVec3| -> PartResult<Node> {
            Ok(hole(diameter / 2.0, through, 0.0)?.translated(location + below))
        };

        let mut cuts = vec![guide(self.boss_diameter, self.boss_center)?];
        for location in self.motor_guides {
            cuts.push(guide(self.motor_guide_diameter, location)?);
        }
        for location in self.rod_guides {
            cuts.push(guide(self.rod_guide_diameter, location)?);
        }
        Ok(body.subtract_all(cuts))
    }
}

impl Part for DrillTemplate {
    fn name(&self) -> &'static str {
        PartKind::DrillTemplate.name()
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

    fn stock() -> DrillTemplate {
        DrillTemplate::new(&StandardCatalog::builtin(), &DrillTemplateConfig::default()).unwrap()
    }

    #[test]
    fn test_footprint_covers_motor_and_rod_mount() {
        let template = stock();
        assert_relative_eq!(template.length, 42.3 + 30.0, epsilon = 1e-12);
        assert_relative_eq!(template.depth, 42.3);
    }

    #[test]
    fn test_rod_guides_sit_on_the_rod_mount_half() {
        let template = stock();
        for guide in template.rod_guides {
            assert!(guide.x > 42.3 && guide.x < template.length);
            assert!(guide.y > 0.0 && guide.y < 38.0);
        }
        for guide in template.motor_guides {
            assert!(guide.x > 0.0 && guide.x < 42.3);
        }
    }

    #[test]
    fn test_every_guide_is_cut() {
        let template = stock();
        // boss, four motor screws, four flange screws
        assert_eq!(template.construction().children().len(), 1 + 9);
    }

    #[test]
    fn test_lip_hangs_below_the_plate() {
        let bbox = stock().construction().bounding_box();
        assert_relative_eq!(bbox.min.z, -5.0);
        assert_relative_eq!(bbox.min.y, -3.0);
    }

    #[test]
    fn test_negative_lip_is_rejected() {
        let config = DrillTemplateConfig {
            lip_depth: -1.0,
            ..DrillTemplateConfig::default()
        };
        assert!(DrillTemplate::new(&StandardCatalog::builtin(), &config).is_err());
    }
}
