//! # Y Carriage End Cap
//!
//! Block pressed onto the free ends of both X rods where they leave the
//! Y-carriage bosses, bolted down through two countersunk screws.
//!
//! The cap uses the Y-carriage's boss radius and rod spacing so its rod
//! pockets line up with the carriage bores.

use glam::DVec3;
use hbot_catalog::{Catalog, Nut, Screw};
use hbot_csg::shapes::nut_trap;
use hbot_csg::Node;
use tracing::debug;

use config::constants::{GlobalConfig, PRESS_FIT_TOLERANCE, SCREW_TOLERANCE};

use crate::derive::ensure_dimensions;
use crate::error::PartResult;
use crate::machine::MachineConfig;
use crate::part::{Part, PartKind};
use crate::parts::bearing_holder::{LinearBearingHolder, LinearBearingHolderConfig};
use crate::solids::{cone, cube, cylinder, hole};

const NAME: &str = "ycarriageendcap";

/// Settings for [`YCarriageEndCap`].
#[derive(Debug, Clone, PartialEq)]
pub struct YCarriageEndCapConfig {
    pub linear_bearing: String,
    pub screw: String,
    pub rod_spacing: f64,
    pub clearance: GlobalConfig,
}

impl Default for YCarriageEndCapConfig {
    fn default() -> Self {
        Self {
            linear_bearing: "LM8UU".to_string(),
            screw: "M3".to_string(),
            rod_spacing: 45.0,
            clearance: GlobalConfig::default(),
        }
    }
}

impl YCarriageEndCapConfig {
    pub fn from_machine(machine: &MachineConfig) -> PartResult<Self> {
        Ok(Self {
            linear_bearing: machine.linear_bearing.clone(),
            screw: machine.screw.clone(),
            rod_spacing: machine.rod_spacing,
            clearance: machine.clearance()?,
        })
    }
}

/// End cap for the X rods of a Y carriage.
#[derive(Debug, Clone)]
pub struct YCarriageEndCap {
    pub screw: Screw,
    pub nut: Nut,
    pub rod_spacing: f64,
    pub rod_diameter: f64,
    pub boss_radius: f64,
    /// Extent along the rods.
    pub depth: f64,
    /// Extent across the rods.
    pub span: f64,
    pub height: f64,
    pub pocket_depth: f64,
    /// Depth of the 90 degree countersink.
    pub countersink: f64,
    construction: Node,
}

impl YCarriageEndCap {
    pub fn new(catalog: &dyn Catalog, config: &YCarriageEndCapConfig) -> PartResult<Self> {
        let holder = LinearBearingHolder::new(
            catalog,
            &LinearBearingHolderConfig {
                linear_bearing: config.linear_bearing.clone(),
                clearance: config.clearance,
                ..LinearBearingHolderConfig::default()
            },
        )?;
        let screw = catalog.screw(&config.screw)?;
        let nut = catalog.nut(&config.screw)?;

        let rod_diameter = holder.bearing.inner_diameter;
        let boss_radius = rod_diameter / 2.0 + holder.wall;
        let depth = holder.length / 2.0;
        let span = config.rod_spacing + boss_radius * 2.0;
        let height = boss_radius * 2.0;
        let pocket_depth = depth - holder.wall;
        let countersink = (screw.head_diameter - screw.outer_diameter) / 2.0;
        let screw_to_rod =
            config.rod_spacing / 4.0 - rod_diameter / 2.0 - screw.head_diameter / 2.0;

        ensure_dimensions(
            NAME,
            &[
                ("depth", depth),
                ("span", span),
                ("pocket_depth", pocket_depth),
                ("countersink", countersink),
                ("screw_to_rod", screw_to_rod),
            ],
        )?;
        debug!(part = NAME, depth, span, pocket_depth, "derived end cap");

        let mut cap = Self {
            screw,
            nut,
            rod_spacing: config.rod_spacing,
            rod_diameter,
            boss_radius,
            depth,
            span,
            height,
            pocket_depth,
            countersink,
            construction: Node::union([]),
        };
        cap.construction = cap.construct(config)?;
        Ok(cap)
    }

    /// Y positions of the two rods.
    pub fn rods(&self) -> [f64; 2] {
        let center = self.span / 2.0;
        [center - self.rod_spacing / 2.0, center + self.rod_spacing / 2.0]
    }

    /// Screw axes on the bed, between the rods.
    pub fn screws(&self) -> [DVec3; 2] {
        let center = self.span / 2.0;
        let x = self.depth / 2.0;
        [
            DVec3::new(x, center - self.rod_spacing / 4.0, 0.0),
            DVec3::new(x, center + self.rod_spacing / 4.0, 0.0),
        ]
    }

    fn construct(&self, config: &YCarriageEndCapConfig) -> PartResult<Node> {
        let offset = config.clearance.render_offset;

        let mut solids = vec![cube(self.depth, self.span, self.boss_radius)?];
        for y in self.rods() {
            solids.push(
                cylinder(self.boss_radius, self.depth)?
                    .rotated(DVec3::Y, 90.0)
                    .translated(DVec3::new(0.0, y, self.boss_radius)),
            );
        }
        let body = Node::hull(solids);

        let mut cuts = Vec::new();
        for y in self.rods() {
            cuts.push(
                hole(
                    self.rod_diameter / 2.0,
                    self.pocket_depth + offset,
                    PRESS_FIT_TOLERANCE,
                )?
                .rotated(DVec3::Y, 90.0)
                .translated(DVec3::new(-offset, y, self.boss_radius)),
            );
        }
        for axis in self.screws() {
            cuts.push(
                hole(
                    self.screw.outer_diameter / 2.0,
                    self.height + 2.0 * offset,
                    SCREW_TOLERANCE,
                )?
                .translated(axis + DVec3::new(0.0, 0.0, -offset)),
            );
            cuts.push(
                cone(
                    self.screw.outer_diameter / 2.0,
                    self.screw.head_diameter / 2.0 + offset,
                    self.countersink + offset,
                )?
                .translated(axis + DVec3::new(0.0, 0.0, self.height - self.countersink)),
            );
            cuts.push(
                nut_trap(self.nut.width, self.nut.height)?
                    .translated(axis + DVec3::new(0.0, 0.0, -offset)),
            );
        }

        Ok(body.subtract_all(cuts))
    }
}

impl Part for YCarriageEndCap {
    fn name(&self) -> &'static str {
        PartKind::YCarriageEndCap.name()
    }

    fn construction(&self) -> &Node {
        &self.construction
    }
}
