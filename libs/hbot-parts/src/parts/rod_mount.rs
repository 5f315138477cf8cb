//! # Y Rod Mount
//!
//! Post holding one end of a Y rod, with a belt window in front of the rod
//! encasement and a screw flange on either side.
//!
//! ```text
//!  side view (rod along +Y)
//!
//!            encasement_start
//!                 |  ____________
//!   ___    ___    | (  rod ====  )
//!  |   |  |   |   |_|____________|
//!  |   |belt  |     |            |
//! _|___|window|_____|____________|__ flange
//! ```
//!
//! The encasement start can be moved after construction by a part that
//! embeds the mount; call [`YRodMount::update`] afterwards.

use glam::DVec3;
use hbot_catalog::{Belt, Catalog, Stepper};
use hbot_csg::Node;
use tracing::debug;

use config::constants::{GlobalConfig, PRESS_FIT_TOLERANCE};

use crate::derive::ensure_dimensions;
use crate::error::PartResult;
use crate::machine::MachineConfig;
use crate::part::{Part, PartKind};
use crate::solids::{cube, cylinder, hole};

const NAME: &str = "yrodmount";

/// Settings for [`YRodMount`].
#[derive(Debug, Clone, PartialEq)]
pub struct YRodMountConfig {
    pub rod_diameter: f64,
    /// Extent along the rod.
    pub mount_length: f64,
    pub stepper: String,
    pub belt: String,
    /// Vertical distance between the two belt runs.
    pub belt_separation: f64,
    /// Frame screw hole diameter.
    pub hole_diameter: f64,
    /// Where the rod encasement begins along the rod. Defaults to half the
    /// mount length.
    pub encasement_start: Option<f64>,
    pub clearance: GlobalConfig,
}

impl Default for YRodMountConfig {
    fn default() -> Self {
        Self {
            rod_diameter: 8.0,
            mount_length: 38.0,
            stepper: "GenericNEMA17".to_string(),
            belt: "GT2".to_string(),
            belt_separation: 16.0,
            hole_diameter: 3.5,
            encasement_start: None,
            clearance: GlobalConfig::default(),
        }
    }
}

impl YRodMountConfig {
    pub fn from_machine(machine: &MachineConfig) -> PartResult<Self> {
        Ok(Self {
            rod_diameter: machine.rod_diameter,
            mount_length: machine.mount_length,
            stepper: machine.stepper.clone(),
            belt: machine.belt.clone(),
            belt_separation: machine.belt_separation,
            hole_diameter: machine.mount_hole_diameter,
            encasement_start: None,
            clearance: machine.clearance()?,
        })
    }
}

/// Post holding one end of a Y rod.
#[derive(Debug, Clone)]
pub struct YRodMount {
    pub config: YRodMountConfig,
    pub stepper: Stepper,
    pub belt: Belt,
    pub wall: f64,
    /// Height of the rod axis, level with the motor shaft.
    pub rod_height: f64,
    pub encasement_radius: f64,
    pub encasement_start: f64,
    pub flange_width: f64,
    pub base_width: f64,
    pub base_thickness: f64,
    /// Depth of the blind rod pocket.
    pub pocket_depth: f64,
    /// Extent of the belt window along the rod.
    pub window_length: f64,
    pub window_height: f64,
    construction: Node,
}

impl YRodMount {
    pub fn new(catalog: &dyn Catalog, config: &YRodMountConfig) -> PartResult<Self> {
        let stepper = catalog.stepper(&config.stepper)?;
        let belt = catalog.belt(&config.belt)?;
        let mut mount = Self {
            config: config.clone(),
            stepper,
            belt,
            wall: 0.0,
            rod_height: 0.0,
            encasement_radius: 0.0,
            encasement_start: 0.0,
            flange_width: 0.0,
            base_width: 0.0,
            base_thickness: 0.0,
            pocket_depth: 0.0,
            window_length: 0.0,
            window_height: 0.0,
            construction: Node::union([]),
        };
        mount.update()?;
        Ok(mount)
    }

    /// Moves the start of the rod encasement. Takes effect on the next
    /// [`YRodMount::update`].
    pub fn set_encasement_start(&mut self, start: f64) {
        self.config.encasement_start = Some(start);
    }

    /// Re-derives every dimension from the current settings and rebuilds the
    /// tree. Hardware records are not looked up again.
    pub fn update(&mut self) -> PartResult<()> {
        let config = &self.config;
        let wall = config.rod_diameter / 2.0;
        let rod_height = self.stepper.width / 2.0;
        let encasement_radius = config.rod_diameter / 2.0 + wall;
        let encasement_start = config
            .encasement_start
            .unwrap_or(config.mount_length / 2.0);
        let flange_width = config.hole_diameter * 2.0;
        let base_width = encasement_radius * 2.0 + flange_width * 2.0;
        let base_thickness = wall;
        let pocket_depth = config.mount_length - encasement_start - wall;
        let window_length = encasement_start - wall * 2.0;
        let window_height = config.belt_separation + self.belt.width;
        let encasement_clearance = rod_height - encasement_radius;

        ensure_dimensions(
            NAME,
            &[
                ("encasement_start", encasement_start),
                ("encasement_clearance", encasement_clearance),
                ("pocket_depth", pocket_depth),
                ("window_length", window_length),
                ("window_height", window_height),
                ("base_width", base_width),
            ],
        )?;
        debug!(
            part = NAME,
            rod_height, encasement_start, pocket_depth, window_length, "derived rod mount"
        );

        self.wall = wall;
        self.rod_height = rod_height;
        self.encasement_radius = encasement_radius;
        self.encasement_start = encasement_start;
        self.flange_width = flange_width;
        self.base_width = base_width;
        self.base_thickness = base_thickness;
        self.pocket_depth = pocket_depth;
        self.window_length = window_length;
        self.window_height = window_height;
        self.construction = self.construct()?;
        Ok(())
    }

    /// Flange screw positions on the bed.
    pub fn base_holes(&self) -> [DVec3; 4] {
        let near = self.config.mount_length * 0.25;
        let far = self.config.mount_length * 0.75;
        let left = self.flange_width / 2.0;
        let right = self.base_width - self.flange_width / 2.0;
        [
            DVec3::new(left, near, 0.0),
            DVec3::new(right, near, 0.0),
            DVec3::new(left, far, 0.0),
            DVec3::new(right, far, 0.0),
        ]
    }

    fn construct(&self) -> PartResult<Node> {
        let offset = self.config.clearance.render_offset;
        let length = self.config.mount_length;
        let center_x = self.base_width / 2.0;
        let encased = length - self.encasement_start;

        let base = cube(self.base_width, length, self.base_thickness)?;
        let post = cube(self.encasement_radius * 2.0, length, self.rod_height)?
            .translated(DVec3::new(self.flange_width, 0.0, 0.0));
        let encasement = cylinder(self.encasement_radius, encased)?
            .rotated(DVec3::X, -90.0)
            .translated(DVec3::new(center_x, self.encasement_start, self.rod_height));
        let body = Node::union([base, post, encasement]);

        let pocket = hole(
            self.config.rod_diameter / 2.0,
            self.pocket_depth + offset,
            PRESS_FIT_TOLERANCE,
        )?
        .rotated(DVec3::X, -90.0)
        .translated(DVec3::new(
            center_x,
            self.encasement_start + self.wall,
            self.rod_height,
        ));
        let window = cube(
            self.encasement_radius * 2.0 + 2.0 * offset,
            self.window_length,
            self.window_height,
        )?
        .translated(DVec3::new(
            self.flange_width - offset,
            self.wall,
            self.base_thickness,
        ));

        let mut cuts = vec![pocket, window];
        for location in self.base_holes() {
            cuts.push(
                hole(
                    self.config.hole_diameter / 2.0,
                    self.base_thickness + 2.0 * offset,
                    0.0,
                )?
                .translated(location + DVec3::new(0.0, 0.0, -offset)),
            );
        }
        Ok(body.subtract_all(cuts))
    }
}

impl Part for YRodMount {
    fn name(&self) -> &'static str {
        PartKind::YRodMount.name()
    }

    fn construction(&self) -> &Node {
        &self.construction
    }
}
