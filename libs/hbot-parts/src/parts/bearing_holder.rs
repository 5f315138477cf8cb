//! # Linear Bearing Holder
//!
//! Cradle for one linear bearing, strapped down with a zip tie.
//!
//! ```text
//!        ___________
//!       /  bearing  \      clamp height cuts the round core flat
//!      |  (  rod  )  |
//!  ____|_____________|____
//! |  base  |zip|  base    |
//! '--------'   '----------'
//! ```
//!
//! The bearing axis runs along +X at `bearing_center` above the bed. The
//! zip tie passes under the bearing through the gap between the two base
//! blocks.

use glam::DVec3;
use hbot_catalog::{Catalog, LinearBearing};
use hbot_csg::shapes::d_shape_negative;
use hbot_csg::Node;
use tracing::debug;

use config::constants::GlobalConfig;

use crate::derive::ensure_dimensions;
use crate::error::PartResult;
use crate::machine::MachineConfig;
use crate::part::{Part, PartKind};
use crate::solids::{cube, cylinder, hole};

const NAME: &str = "linearbearingholder";

/// Settings for [`LinearBearingHolder`].
#[derive(Debug, Clone, PartialEq)]
pub struct LinearBearingHolderConfig {
    pub linear_bearing: String,
    pub zip_tie_width: f64,
    pub zip_tie_height: f64,
    /// Clamp height as a fraction of the bearing's outer diameter.
    pub clamp_factor: f64,
    pub clearance: GlobalConfig,
}

impl Default for LinearBearingHolderConfig {
    fn default() -> Self {
        Self {
            linear_bearing: "LM8UU".to_string(),
            zip_tie_width: 5.0,
            zip_tie_height: 2.0,
            clamp_factor: 0.75,
            clearance: GlobalConfig::default(),
        }
    }
}

impl LinearBearingHolderConfig {
    pub fn from_machine(machine: &MachineConfig) -> PartResult<Self> {
        Ok(Self {
            linear_bearing: machine.linear_bearing.clone(),
            zip_tie_width: machine.zip_tie_width,
            zip_tie_height: machine.zip_tie_height,
            clearance: machine.clearance()?,
            ..Self::default()
        })
    }
}

/// A holder for one linear bearing.
#[derive(Debug, Clone)]
pub struct LinearBearingHolder {
    pub bearing: LinearBearing,
    /// Wall thickness around the bearing.
    pub wall: f64,
    /// Extent along the bearing axis.
    pub length: f64,
    /// Extent across the bearing axis.
    pub width: f64,
    /// Height of the bearing axis above the bed.
    pub bearing_center: f64,
    /// Height of the clamp above the bearing axis plane, before wall and zip tie.
    pub clamp: f64,
    /// Overall height.
    pub height: f64,
    construction: Node,
}

impl LinearBearingHolder {
    pub fn new(catalog: &dyn Catalog, config: &LinearBearingHolderConfig) -> PartResult<Self> {
        let bearing = catalog.linear_bearing(&config.linear_bearing)?;

        let wall = bearing.outer_diameter * 0.25;
        let length = bearing.length + wall * 2.0;
        let width = bearing.outer_diameter + wall * 2.0;
        let bearing_center = width / 2.0 + config.zip_tie_height;
        let clamp = bearing.outer_diameter * config.clamp_factor;
        let height = clamp + wall + config.zip_tie_height;
        let base_length = (length - config.zip_tie_width) / 2.0;

        ensure_dimensions(
            NAME,
            &[
                ("wall", wall),
                ("length", length),
                ("width", width),
                ("bearing_center", bearing_center),
                ("clamp", clamp),
                ("height", height),
                ("base_length", base_length),
            ],
        )?;
        debug!(
            part = NAME,
            wall, length, width, bearing_center, height, "derived holder"
        );

        let mut holder = Self {
            bearing,
            wall,
            length,
            width,
            bearing_center,
            clamp,
            height,
            construction: Node::union([]),
        };
        holder.construction = holder.construct(config, base_length)?;
        Ok(holder)
    }

    fn construct(&self, config: &LinearBearingHolderConfig, base_length: f64) -> PartResult<Node> {
        let offset = config.clearance.render_offset;
        let axis = DVec3::new(0.0, self.width / 2.0, self.bearing_center);

        let core = cylinder(self.width / 2.0, self.length)?
            .rotated(DVec3::Y, 90.0)
            .at(DVec3::new(0.0, axis.y, axis.z));
        let base = cube(base_length, self.width, self.bearing_center)?;
        let far_base = base
            .clone()
            .translated(DVec3::new((self.length + config.zip_tie_width) / 2.0, 0.0, 0.0));

        let rod_clearance = d_shape_negative(
            self.bearing.inner_diameter / 2.0 + config.clearance.rod_clearance,
            self.bearing.outer_diameter,
            self.length + 2.0 * offset,
        )?
        .rotated(DVec3::Z, 90.0)
        .rotated(DVec3::Y, 90.0)
        .at(DVec3::new(-offset, axis.y, axis.z));
        let bearing = hole(self.bearing.outer_diameter / 2.0, self.bearing.length, 0.0)?
            .rotated(DVec3::Y, 90.0)
            .at(DVec3::new(self.wall, axis.y, axis.z));

        let body = Node::union([core, base, far_base])
            .subtract(rod_clearance)
            .subtract(bearing);
        let keep = cube(self.length, self.width, self.height)?;
        Ok(Node::intersection([body, keep]))
    }
}

impl Part for LinearBearingHolder {
    fn name(&self) -> &'static str {
        PartKind::LinearBearingHolder.name()
    }

    fn construction(&self) -> &Node {
        &self.construction
    }
}
