//! # Y Carriage
//!
//! Carriage riding on one Y rod and holding one end of both X rods.
//!
//! Two bearing holders sit in line along the Y rod on the -X side. On the
//! +X side two bosses take the X rods in blind bores, each locked by a set
//! screw whose nut slides in from the outside. Two idler axles between the
//! bosses carry the belt idlers.
//!
//! ```text
//!   y
//!   ^  [holder]  ====(boss)==== X rod
//!   |  [      ]     o  idler
//!   |  [holder]     o  idler
//!   |  [      ]  ====(boss)==== X rod
//!   +--------------------------> x
//! ```

use glam::DVec3;
use hbot_catalog::{Bearing, Belt, Catalog, Nut, Screw};
use hbot_csg::shapes::{nut_slot, nut_trap};
use hbot_csg::Node;
use tracing::debug;

use config::constants::{GlobalConfig, NUT_TRAP_MARGIN, PRESS_FIT_TOLERANCE, SCREW_TOLERANCE};

use crate::derive::ensure_dimensions;
use crate::error::PartResult;
use crate::machine::MachineConfig;
use crate::part::{Part, PartKind};
use crate::parts::bearing_holder::{LinearBearingHolder, LinearBearingHolderConfig};
use crate::solids::{cube, cylinder, hole};

const NAME: &str = "ycarriage";

/// Settings for [`YCarriage`].
#[derive(Debug, Clone, PartialEq)]
pub struct YCarriageConfig {
    pub linear_bearing: String,
    pub screw: String,
    /// Centre distance between the two X rods.
    pub rod_spacing: f64,
    pub zip_tie_width: f64,
    pub zip_tie_height: f64,
    pub idler_bearing: String,
    pub belt: String,
    pub clearance: GlobalConfig,
}

impl Default for YCarriageConfig {
    fn default() -> Self {
        Self {
            linear_bearing: "LM8UU".to_string(),
            screw: "M3".to_string(),
            rod_spacing: 45.0,
            zip_tie_width: 5.0,
            zip_tie_height: 2.0,
            idler_bearing: "623".to_string(),
            belt: "GT2".to_string(),
            clearance: GlobalConfig::default(),
        }
    }
}

impl YCarriageConfig {
    pub fn from_machine(machine: &MachineConfig) -> PartResult<Self> {
        Ok(Self {
            linear_bearing: machine.linear_bearing.clone(),
            screw: machine.screw.clone(),
            rod_spacing: machine.rod_spacing,
            zip_tie_width: machine.zip_tie_width,
            zip_tie_height: machine.zip_tie_height,
            idler_bearing: machine.idler_bearing.clone(),
            belt: machine.belt.clone(),
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

/// Carriage for the Y axis.
#[derive(Debug, Clone)]
pub struct YCarriage {
    pub holder: LinearBearingHolder,
    pub screw: Screw,
    pub nut: Nut,
    pub idler: Bearing,
    pub belt: Belt,
    pub rod_spacing: f64,
    /// X rod diameter, equal to the linear bearing bore.
    pub rod_diameter: f64,
    pub boss_radius: f64,
    pub boss_length: f64,
    /// Blind bore depth inside each boss.
    pub bore_depth: f64,
    /// Overall extent along Y.
    pub span: f64,
    pub plate_thickness: f64,
    /// Height of the X rod axes.
    pub rod_height: f64,
    /// Centre distance between the two idler axles.
    pub idler_spacing: f64,
    /// Height of the set-screw nut above the bed.
    pub set_nut_height: f64,
    construction: Node,
}

impl YCarriage {
    pub fn new(catalog: &dyn Catalog, config: &YCarriageConfig) -> PartResult<Self> {
        let holder = LinearBearingHolder::new(catalog, &config.holder())?;
        let screw = catalog.screw(&config.screw)?;
        let nut = catalog.nut(&config.screw)?;
        let idler = catalog.bearing(&config.idler_bearing)?;
        let belt = catalog.belt(&config.belt)?;

        let rod_diameter = holder.bearing.inner_diameter;
        let boss_radius = rod_diameter / 2.0 + holder.wall;
        let boss_length = holder.length;
        let bore_depth = boss_length - holder.wall;
        let span = (config.rod_spacing + boss_radius * 2.0)
            .max(holder.length * 2.0 + holder.wall);
        let plate_thickness = nut.height * 2.0;
        let rod_height = boss_radius;
        let idler_spacing = idler.outer_diameter + belt.thickness * 2.0;
        let rod_gap = config.rod_spacing - boss_radius * 2.0 - idler_spacing;
        let nut_wall = holder.wall - nut.height - NUT_TRAP_MARGIN;
        let set_nut_height = rod_height + rod_diameter / 2.0 + nut_wall / 2.0;

        ensure_dimensions(
            NAME,
            &[
                ("boss_radius", boss_radius),
                ("bore_depth", bore_depth),
                ("span", span),
                ("plate_thickness", plate_thickness),
                ("idler_spacing", idler_spacing),
                ("rod_gap", rod_gap),
                ("nut_wall", nut_wall),
            ],
        )?;
        debug!(
            part = NAME,
            boss_radius, span, idler_spacing, rod_gap, "derived carriage"
        );

        let mut carriage = Self {
            holder,
            screw,
            nut,
            idler,
            belt,
            rod_spacing: config.rod_spacing,
            rod_diameter,
            boss_radius,
            boss_length,
            bore_depth,
            span,
            plate_thickness,
            rod_height,
            idler_spacing,
            set_nut_height,
            construction: Node::union([]),
        };
        carriage.construction = carriage.construct(config)?;
        Ok(carriage)
    }

    /// Y positions of the two X rods, with the direction their set-screw
    /// nut slots open toward (degrees about Z, 90 is +Y).
    pub fn x_rods(&self) -> [(f64, f64); 2] {
        let center = self.span / 2.0;
        [
            (center - self.rod_spacing / 2.0, -90.0),
            (center + self.rod_spacing / 2.0, 90.0),
        ]
    }

    /// Idler axle positions on the bed.
    pub fn idler_axles(&self) -> [DVec3; 2] {
        let x = self.holder.width + self.boss_length / 2.0;
        let center = self.span / 2.0;
        [
            DVec3::new(x, center - self.idler_spacing / 2.0, 0.0),
            DVec3::new(x, center + self.idler_spacing / 2.0, 0.0),
        ]
    }

    fn construct(&self, config: &YCarriageConfig) -> PartResult<Node> {
        let offset = config.clearance.render_offset;
        let width = self.holder.width;
        let below = DVec3::new(0.0, 0.0, -offset);

        let holder = self
            .holder
            .construction()
            .clone()
            .rotated(DVec3::Z, 90.0);
        let mut solids = vec![
            holder.clone().translated(DVec3::new(width, 0.0, 0.0)),
            holder.translated(DVec3::new(width, self.span - self.holder.length, 0.0)),
            cube(width + self.boss_length, self.span, self.plate_thickness)?,
        ];
        for (y, _) in self.x_rods() {
            solids.push(
                cylinder(self.boss_radius, self.boss_length)?
                    .rotated(DVec3::Y, 90.0)
                    .translated(DVec3::new(width, y, self.rod_height)),
            );
            solids.push(
                cube(self.boss_length, self.boss_radius * 2.0, self.rod_height)?
                    .translated(DVec3::new(width, y - self.boss_radius, 0.0)),
            );
        }
        let body = Node::union(solids);

        let mut cuts = Vec::new();
        let screw_x = width + self.boss_length / 2.0;
        for (y, facing) in self.x_rods() {
            cuts.push(
                hole(
                    self.rod_diameter / 2.0,
                    self.bore_depth + offset,
                    PRESS_FIT_TOLERANCE,
                )?
                .rotated(DVec3::Y, 90.0)
                .translated(DVec3::new(width + self.holder.wall, y, self.rod_height)),
            );
            cuts.push(
                hole(
                    self.screw.outer_diameter / 2.0,
                    self.boss_radius + offset,
                    SCREW_TOLERANCE,
                )?
                .translated(DVec3::new(screw_x, y, self.rod_height)),
            );
            cuts.push(
                nut_slot(self.nut.width, self.nut.height, self.boss_radius + offset)?
                    .rotated(DVec3::Z, facing)
                    .translated(DVec3::new(screw_x, y, self.set_nut_height)),
            );
        }
        for axle in self.idler_axles() {
            cuts.push(
                hole(
                    self.idler.inner_diameter / 2.0,
                    self.plate_thickness + 2.0 * offset,
                    SCREW_TOLERANCE,
                )?
                .translated(axle + below),
            );
            cuts.push(nut_trap(self.nut.width, self.nut.height)?.translated(axle + below));
        }

        Ok(body.subtract_all(cuts))
    }
}

impl Part for YCarriage {
    fn name(&self) -> &'static str {
        PartKind::YCarriage.name()
    }

    fn construction(&self) -> &Node {
        &self.construction
    }
}
