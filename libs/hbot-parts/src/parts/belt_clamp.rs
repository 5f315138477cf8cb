//! # Belt Clamp
//!
//! Rounded bar pressed onto a belt end by two screws, one either side of
//! the belt. Grooves on the underside mesh with the belt teeth.
//!
//! The screws go into the nut traps of the X carriage, so the hole spacing
//! is the belt width plus one nut width: each screw axis sits half a nut
//! clear of the belt edge.

use glam::DVec3;
use hbot_catalog::{Belt, Catalog, Nut, Screw};
use hbot_csg::Node;
use tracing::debug;

use config::constants::{GlobalConfig, SCREW_TOLERANCE};

use crate::derive::ensure_dimensions;
use crate::error::PartResult;
use crate::machine::MachineConfig;
use crate::part::{Part, PartKind};
use crate::solids::{cube, cylinder, hole};

const NAME: &str = "beltclamp";

/// Settings for [`BeltClamp`].
#[derive(Debug, Clone, PartialEq)]
pub struct BeltClampConfig {
    pub belt: String,
    pub screw: String,
    pub clearance: GlobalConfig,
}

impl Default for BeltClampConfig {
    fn default() -> Self {
        Self {
            belt: "GT2".to_string(),
            screw: "M3".to_string(),
            clearance: GlobalConfig::default(),
        }
    }
}

impl BeltClampConfig {
    pub fn from_machine(machine: &MachineConfig) -> PartResult<Self> {
        Ok(Self {
            belt: machine.belt.clone(),
            screw: machine.screw.clone(),
            clearance: machine.clearance()?,
        })
    }
}

/// Belt clamp bar.
#[derive(Debug, Clone)]
pub struct BeltClamp {
    pub belt: Belt,
    pub screw: Screw,
    pub nut: Nut,
    pub hole_spacing: f64,
    pub wall: f64,
    /// Extent across the screw line.
    pub width: f64,
    /// Extent along the screw line.
    pub length: f64,
    pub thickness: f64,
    pub groove_count: usize,
    construction: Node,
}

impl BeltClamp {
    pub fn new(catalog: &dyn Catalog, config: &BeltClampConfig) -> PartResult<Self> {
        let belt = catalog.belt(&config.belt)?;
        let screw = catalog.screw(&config.screw)?;
        let nut = catalog.nut(&config.screw)?;

        let hole_spacing = belt.width + nut.width;
        let wall = nut.height;
        let width = screw.head_diameter + wall * 2.0;
        let length = hole_spacing + width;
        let thickness = nut.height + wall;
        let clamp_floor = thickness - belt.tooth_height;
        let free_pitch = width - belt.pitch;

        ensure_dimensions(
            NAME,
            &[
                ("hole_spacing", hole_spacing),
                ("width", width),
                ("thickness", thickness),
                ("clamp_floor", clamp_floor),
                ("free_pitch", free_pitch),
            ],
        )?;
        let groove_count = if belt.pitch > 0.0 {
            (width / belt.pitch).floor() as usize
        } else {
            0
        };
        debug!(part = NAME, hole_spacing, length, groove_count, "derived belt clamp");

        let mut clamp = Self {
            belt,
            screw,
            nut,
            hole_spacing,
            wall,
            width,
            length,
            thickness,
            groove_count,
            construction: Node::union([]),
        };
        clamp.construction = clamp.construct(config)?;
        Ok(clamp)
    }

    /// Screw axes on the bed.
    pub fn holes(&self) -> [DVec3; 2] {
        let first = DVec3::new(self.width / 2.0, self.width / 2.0, 0.0);
        [first, first + DVec3::new(self.hole_spacing, 0.0, 0.0)]
    }

    fn construct(&self, config: &BeltClampConfig) -> PartResult<Node> {
        let offset = config.clearance.render_offset;
        let below = DVec3::new(0.0, 0.0, -offset);

        let [first, second] = self.holes();
        let body = Node::hull([
            cylinder(self.width / 2.0, self.thickness)?.translated(first),
            cylinder(self.width / 2.0, self.thickness)?.translated(second),
        ]);

        let mut cuts = Vec::new();
        for axis in [first, second] {
            cuts.push(
                hole(
                    self.screw.outer_diameter / 2.0,
                    self.thickness + 2.0 * offset,
                    SCREW_TOLERANCE,
                )?
                .translated(axis + below),
            );
        }

        let pitch = self.belt.pitch;
        let channel_x = first.x + self.nut.width / 2.0;
        let taken = (self.groove_count.saturating_sub(1)) as f64 * pitch + pitch / 2.0;
        let first_groove = (self.width - taken) / 2.0;
        for k in 0..self.groove_count {
            cuts.push(
                cube(self.belt.width, pitch / 2.0, self.belt.tooth_height + offset)?
                    .translated(DVec3::new(channel_x, first_groove + k as f64 * pitch, -offset)),
            );
        }

        Ok(body.subtract_all(cuts))
    }
}

impl Part for BeltClamp {
    fn name(&self) -> &'static str {
        PartKind::BeltClamp.name()
    }

    fn construction(&self) -> &Node {
        &self.construction
    }
}
