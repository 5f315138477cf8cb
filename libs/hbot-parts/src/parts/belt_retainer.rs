//! # Belt Retainer
//!
//! Block holding a folded belt loop in a vertical slot. A screw driven in
//! from the side through a captive nut presses the loop against the far
//! wall.
//!
//! ```text
//!  x -->
//!  +------+-----+--+
//!  | nut  |loop |  |
//!  |=[#]==>     |  |   tension screw
//!  |      |     |  |
//! =+------+-----+--+=  flange
//! ```

use glam::DVec3;
use hbot_catalog::{Belt, Catalog, Nut, Screw};
use hbot_csg::shapes::nut_slot;
use hbot_csg::Node;
use tracing::debug;

use config::constants::{GlobalConfig, NUT_TRAP_MARGIN, SCREW_TOLERANCE};

use crate::derive::ensure_dimensions;
use crate::error::PartResult;
use crate::machine::MachineConfig;
use crate::part::{Part, PartKind};
use crate::solids::{cube, hole};

const NAME: &str = "beltretainer";

/// Play around the doubled belt in the loop slot.
const LOOP_CLEARANCE: f64 = 0.5;

/// Settings for [`BeltRetainer`].
#[derive(Debug, Clone, PartialEq)]
pub struct BeltRetainerConfig {
    pub belt: String,
    pub screw: String,
    pub clearance: GlobalConfig,
}

impl Default for BeltRetainerConfig {
    fn default() -> Self {
        Self {
            belt: "GT2".to_string(),
            screw: "M3".to_string(),
            clearance: GlobalConfig::default(),
        }
    }
}

impl BeltRetainerConfig {
    pub fn from_machine(machine: &MachineConfig) -> PartResult<Self> {
        Ok(Self {
            belt: machine.belt.clone(),
            screw: machine.screw.clone(),
            clearance: machine.clearance()?,
        })
    }
}

/// Belt loop retainer.
#[derive(Debug, Clone)]
pub struct BeltRetainer {
    pub belt: Belt,
    pub screw: Screw,
    pub nut: Nut,
    pub wall: f64,
    pub slot_width: f64,
    pub slot_height: f64,
    /// Wall holding the captive nut.
    pub nut_wall: f64,
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub flange: f64,
    /// Height of the tension screw axis.
    pub screw_height: f64,
    construction: Node,
}

impl BeltRetainer {
    pub fn new(catalog: &dyn Catalog, config: &BeltRetainerConfig) -> PartResult<Self> {
        let belt = catalog.belt(&config.belt)?;
        let screw = catalog.screw(&config.screw)?;
        let nut = catalog.nut(&config.screw)?;

        let wall = nut.height;
        let slot_width = belt.thickness * 2.0 + LOOP_CLEARANCE;
        let slot_height = belt.width + LOOP_CLEARANCE * 2.0;
        let nut_wall = nut.height + wall * 2.0;
        let width = nut_wall + slot_width + wall;
        let length = nut.width * 3.0;
        let height = slot_height + wall * 2.0;
        let flange = screw.head_diameter + wall;
        let screw_height = wall + slot_height / 2.0;
        let nut_headroom = height - screw_height - nut.width / 2.0;

        ensure_dimensions(
            NAME,
            &[
                ("slot_width", slot_width),
                ("slot_height", slot_height),
                ("nut_wall", nut_wall),
                ("length", length),
                ("flange", flange),
                ("nut_headroom", nut_headroom),
            ],
        )?;
        debug!(part = NAME, slot_width, slot_height, width, "derived belt retainer");

        let mut retainer = Self {
            belt,
            screw,
            nut,
            wall,
            slot_width,
            slot_height,
            nut_wall,
            width,
            length,
            height,
            flange,
            screw_height,
            construction: Node::union([]),
        };
        retainer.construction = retainer.construct(config)?;
        Ok(retainer)
    }

    fn construct(&self, config: &BeltRetainerConfig) -> PartResult<Node> {
        let offset = config.clearance.render_offset;
        let screw_y = self.length / 2.0;

        let block = cube(self.width, self.length, self.height)?;
        let flange = cube(self.width, self.length + self.flange * 2.0, self.wall)?
            .translated(DVec3::new(0.0, -self.flange, 0.0));
        let body = Node::union([block, flange]);

        let mut cuts = vec![
            cube(self.slot_width, self.length + 2.0 * offset, self.slot_height)?
                .translated(DVec3::new(self.nut_wall, -offset, self.wall)),
            hole(
                self.screw.outer_diameter / 2.0,
                self.nut_wall + 2.0 * offset,
                SCREW_TOLERANCE,
            )?
            .rotated(DVec3::Y, 90.0)
            .translated(DVec3::new(-offset, screw_y, self.screw_height)),
            nut_slot(
                self.nut.width,
                self.nut.height,
                self.height - self.screw_height + offset,
            )?
            .rotated(DVec3::Y, -90.0)
            .translated(DVec3::new(
                self.wall + self.nut.height + NUT_TRAP_MARGIN,
                screw_y,
                self.screw_height,
            )),
        ];
        let center_x = self.width / 2.0;
        for y in [-self.flange / 2.0, self.length + self.flange / 2.0] {
            cuts.push(
                hole(
                    self.screw.outer_diameter / 2.0,
                    self.wall + 2.0 * offset,
                    SCREW_TOLERANCE,
                )?
                .translated(DVec3::new(center_x, y, -offset)),
            );
        }

        Ok(body.subtract_all(cuts))
    }
}

impl Part for BeltRetainer {
    fn name(&self) -> &'static str {
        PartKind::BeltRetainer.name()
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

    fn stock() -> BeltRetainer {
        BeltRetainer::new(&StandardCatalog::builtin(), &BeltRetainerConfig::default()).unwrap()
    }

    #[test]
    fn test_gt2_loop_slot() {
        let retainer = stock();
        assert_relative_eq!(retainer.slot_width, 3.26, epsilon = 1e-12);
        assert_relative_eq!(retainer.slot_height, 7.0);
        assert_relative_eq!(retainer.screw_height, 5.9, epsilon = 1e-12);
    }

    #[test]
    fn test_nut_slot_opens_through_the_top() {
        let retainer = stock();
        let slot = &retainer.construction().children()[3];
        let bbox = slot.bounding_box();
        assert!(bbox.max.z > retainer.height);
        assert!(bbox.min.x >= retainer.wall - 1e-9);
        assert!(bbox.max.x <= retainer.nut_wall);
    }

    #[test]
    fn test_every_cut_is_kept() {
        let retainer = stock();
        // loop slot, tension screw, nut slot, two flange holes
        assert_eq!(retainer.construction().children().len(), 1 + 5);
    }
}
