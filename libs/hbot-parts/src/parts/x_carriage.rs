//! # X Carriage
//!
//! Carriage riding on the two X rods: two bearing holders on the top rod,
//! one on the bottom rod, a hulled plate between them, belt-clamp nut traps
//! in the plate and five screw tabs around the edge.
//!
//! ```text
//!   tab        tab        tab
//!  [holder ][ holder ]           y = 0
//!  \  o o  belt clamp  /
//!   \ o o             /          plate (hull)
//!    [   holder     ]            y = rod_spacing
//!       tab    tab
//! ```

use glam::DVec3;
use hbot_catalog::{Catalog, Nut, Screw};
use hbot_csg::shapes::{d_shape, nut_trap};
use hbot_csg::Node;
use tracing::debug;

use config::constants::{GlobalConfig, SCREW_TOLERANCE};

use crate::derive::ensure_dimensions;
use crate::error::PartResult;
use crate::machine::MachineConfig;
use crate::part::{Part, PartKind};
use crate::parts::bearing_holder::{LinearBearingHolder, LinearBearingHolderConfig};
use crate::solids::{cube, hole};

const NAME: &str = "xcarriage";

/// Settings for [`XCarriage`].
#[derive(Debug, Clone, PartialEq)]
pub struct XCarriageConfig {
    pub linear_bearing: String,
    pub screw: String,
    /// Centre distance between the two X rods.
    pub rod_spacing: f64,
    pub zip_tie_width: f64,
    pub zip_tie_height: f64,
    pub clearance: GlobalConfig,
}

impl Default for XCarriageConfig {
    fn default() -> Self {
        Self {
            linear_bearing: "LM8UU".to_string(),
            screw: "M3".to_string(),
            rod_spacing: 45.0,
            zip_tie_width: 5.0,
            zip_tie_height: 2.0,
            clearance: GlobalConfig::default(),
        }
    }
}

impl XCarriageConfig {
    pub fn from_machine(machine: &MachineConfig) -> PartResult<Self> {
        Ok(Self {
            linear_bearing: machine.linear_bearing.clone(),
            screw: machine.screw.clone(),
            rod_spacing: machine.rod_spacing,
            zip_tie_width: machine.zip_tie_width,
            zip_tie_height: machine.zip_tie_height,
            clearance: machine.clearance()?,
        })
    }

    fn holder(&self) -> LinearBearingHolderConfig {
        LinearBearingHolderConfig {
            linear_bearing: self.linear_bearing.clone(),
            zip_tie_width: self.zip_tie_width,
            zip_tie_height: self.zip_tie_height,
            clearance: self.clearance,
            ..LinearBearingHolderConfig::default()
        }
    }
}

/// One screw tab on the carriage edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountingTab {
    /// Screw axis position on the bed.
    pub location: DVec3,
    /// Rotation about Z, in degrees, of the tab's flat side. At 0 the flat
    /// side points toward +Y.
    pub facing: f64,
}

/// Carriage for the X axis.
#[derive(Debug, Clone)]
pub struct XCarriage {
    pub holder: LinearBearingHolder,
    pub screw: Screw,
    pub nut: Nut,
    pub top_length: f64,
    pub bottom_length: f64,
    pub plate_thickness: f64,
    /// Distance between the nut traps of one belt clamp.
    pub belt_clamp_hole_spacing: f64,
    /// Distance between the two belt clamps.
    pub belt_clamp_spacing: f64,
    pub tab_radius: f64,
    pub tabs: [MountingTab; 5],
    construction: Node,
}

impl XCarriage {
    pub fn new(catalog: &dyn Catalog, config: &XCarriageConfig) -> PartResult<Self> {
        let holder = LinearBearingHolder::new(catalog, &config.holder())?;
        let screw = catalog.screw(&config.screw)?;
        let nut = catalog.nut(&config.screw)?;

        let top_length = holder.bearing.length * 2.0 + holder.wall * 3.0;
        let bottom_length = holder.bearing.length + holder.wall * 2.0;
        let plate_thickness = nut.height * 2.0;
        let belt_clamp_hole_spacing = config.rod_spacing - holder.width - nut.width * 2.0;
        let belt_clamp_spacing = holder.length / 2.0;
        let tab_radius = holder.length / 4.0 - config.zip_tie_width / 4.0;

        ensure_dimensions(
            NAME,
            &[
                ("top_length", top_length),
                ("bottom_length", bottom_length),
                ("plate_thickness", plate_thickness),
                ("belt_clamp_hole_spacing", belt_clamp_hole_spacing),
                ("belt_clamp_spacing", belt_clamp_spacing),
                ("tab_radius", tab_radius),
            ],
        )?;
        debug!(
            part = NAME,
            top_length, bottom_length, plate_thickness, belt_clamp_hole_spacing, tab_radius,
            "derived carriage"
        );

        let near_row = -nut.width / 2.0;
        let far_row = nut.width / 2.0 + holder.width + config.rod_spacing;
        let far_offset = tab_radius + config.zip_tie_width / 2.0;
        let tabs = [
            MountingTab {
                location: DVec3::new(tab_radius, near_row, 0.0),
                facing: 0.0,
            },
            MountingTab {
                location: DVec3::new(top_length / 2.0, near_row, 0.0),
                facing: 0.0,
            },
            MountingTab {
                location: DVec3::new(top_length - tab_radius, near_row, 0.0),
                facing: 0.0,
            },
            MountingTab {
                location: DVec3::new(top_length / 2.0 - far_offset, far_row, 0.0),
                facing: 180.0,
            },
            MountingTab {
                location: DVec3::new(top_length / 2.0 + far_offset, far_row, 0.0),
                facing: 180.0,
            },
        ];

        let mut carriage = Self {
            holder,
            screw,
            nut,
            top_length,
            bottom_length,
            plate_thickness,
            belt_clamp_hole_spacing,
            belt_clamp_spacing,
            tab_radius,
            tabs,
            construction: Node::union([]),
        };
        carriage.construction = carriage.construct(config)?;
        Ok(carriage)
    }

    /// Nut trap positions of the two belt clamps, on the bed.
    pub fn belt_clamp_nuts(&self) -> [DVec3; 4] {
        let first = DVec3::new(
            self.top_length / 2.0 - self.belt_clamp_spacing / 2.0,
            self.holder.width + self.nut.width,
            0.0,
        );
        let second = first + DVec3::new(self.belt_clamp_spacing, 0.0, 0.0);
        let across = DVec3::new(0.0, self.belt_clamp_hole_spacing, 0.0);
        [first, second, first + across, second + across]
    }

    fn construct(&self, config: &XCarriageConfig) -> PartResult<Node> {
        let offset = config.clearance.render_offset;
        let bottom_x = self.top_length / 2.0 - self.bottom_length / 2.0;

        let holder = self.holder.construction();
        let holders = [
            holder.clone(),
            holder
                .clone()
                .translated(DVec3::new(self.holder.bearing.length + self.holder.wall, 0.0, 0.0)),
            holder
                .clone()
                .translated(DVec3::new(bottom_x, config.rod_spacing, 0.0)),
        ];

        let plate = Node::hull([
            cube(self.top_length, 1.0, self.plate_thickness)?
                .translated(DVec3::new(0.0, self.holder.width, 0.0)),
            cube(self.bottom_length, 1.0, self.plate_thickness)?
                .translated(DVec3::new(bottom_x, config.rod_spacing - 1.0, 0.0)),
        ]);

        let mut solids: Vec<Node> = holders.into_iter().collect();
        solids.push(plate);
        for tab in &self.tabs {
            solids.push(
                d_shape(self.tab_radius, self.tab_radius, self.plate_thickness)?
                    .rotated(DVec3::Z, tab.facing)
                    .translated(tab.location),
            );
        }
        let body = Node::union(solids);

        let below = DVec3::new(0.0, 0.0, -offset);
        let mut cuts = Vec::new();
        let nuts = self.belt_clamp_nuts();
        for location in nuts {
            cuts.push(nut_trap(self.nut.width, self.nut.height)?.translated(location + below));
        }
        for location in nuts {
            cuts.push(
                hole(
                    self.nut.diameter / 2.0,
                    self.plate_thickness + 3.0 * offset,
                    0.0,
                )?
                .translated(location + below),
            );
        }
        for tab in &self.tabs {
            cuts.push(
                hole(
                    self.screw.outer_diameter / 2.0,
                    self.plate_thickness + 2.0 * offset,
                    SCREW_TOLERANCE,
                )?
                .translated(tab.location + below),
            );
            cuts.push(
                nut_trap(self.nut.width, self.nut.height)?.translated(
                    tab.location + DVec3::new(0.0, 0.0, self.plate_thickness - self.nut.height),
                ),
            );
        }

        Ok(body.subtract_all(cuts))
    }
}

impl Part for XCarriage {
    fn name(&self) -> &'static str {
        PartKind::XCarriage.name()
    }

    fn construction(&self) -> &Node {
        &self.construction
    }
}
