//! # Y Bearing Mount
//!
//! Two-cheek bracket carrying a radial bearing as a belt idler on a screw
//! axle. The axle nut sits in a trap on the outside of the far cheek.

use glam::DVec3;
use hbot_catalog::{Bearing, Catalog, Nut, Screw};
use hbot_csg::shapes::nut_trap;
use hbot_csg::Node;
use tracing::debug;

use config::constants::{GlobalConfig, SCREW_TOLERANCE};

use crate::derive::ensure_dimensions;
use crate::error::PartResult;
use crate::machine::MachineConfig;
use crate::part::{Part, PartKind};
use crate::solids::{cube, cylinder, hole};

const NAME: &str = "ybearingmount";

/// Free space around the bearing, for washers and above the base.
const BEARING_CLEARANCE: f64 = 1.0;

/// Settings for [`YBearingMount`].
#[derive(Debug, Clone, PartialEq)]
pub struct YBearingMountConfig {
    pub idler_bearing: String,
    pub screw: String,
    pub clearance: GlobalConfig,
}

impl Default for YBearingMountConfig {
    fn default() -> Self {
        Self {
            idler_bearing: "623".to_string(),
            screw: "M3".to_string(),
            clearance: GlobalConfig::default(),
        }
    }
}

impl YBearingMountConfig {
    pub fn from_machine(machine: &MachineConfig) -> PartResult<Self> {
        Ok(Self {
            idler_bearing: machine.idler_bearing.clone(),
            screw: machine.screw.clone(),
            clearance: machine.clearance()?,
        })
    }
}

/// Idler bracket.
#[derive(Debug, Clone)]
pub struct YBearingMount {
    pub bearing: Bearing,
    pub screw: Screw,
    pub nut: Nut,
    /// Gap between the cheeks.
    pub gap: f64,
    pub cheek_thickness: f64,
    /// Extent of a cheek along Y.
    pub depth: f64,
    pub axle_height: f64,
    pub total_width: f64,
    pub flange: f64,
    construction: Node,
}

impl YBearingMount {
    pub fn new(catalog: &dyn Catalog, config: &YBearingMountConfig) -> PartResult<Self> {
        let bearing = catalog.bearing(&config.idler_bearing)?;
        let screw = catalog.screw(&config.screw)?;
        let nut = catalog.nut(&config.screw)?;

        let gap = bearing.width + BEARING_CLEARANCE;
        let cheek_thickness = nut.height * 2.0;
        let depth = bearing.outer_diameter + cheek_thickness * 2.0;
        let axle_height = cheek_thickness + bearing.outer_diameter / 2.0 + BEARING_CLEARANCE;
        let total_width = cheek_thickness * 2.0 + gap;
        let flange = screw.head_diameter * 1.5;
        let axle_margin = depth / 2.0 - nut.width;

        ensure_dimensions(
            NAME,
            &[
                ("gap", gap),
                ("cheek_thickness", cheek_thickness),
                ("axle_height", axle_height),
                ("flange", flange),
                ("axle_margin", axle_margin),
            ],
        )?;
        debug!(part = NAME, gap, depth, axle_height, "derived idler mount");

        let mut mount = Self {
            bearing,
            screw,
            nut,
            gap,
            cheek_thickness,
            depth,
            axle_height,
            total_width,
            flange,
            construction: Node::union([]),
        };
        mount.construction = mount.construct(config)?;
        Ok(mount)
    }

    fn construct(&self, config: &YBearingMountConfig) -> PartResult<Node> {
        let offset = config.clearance.render_offset;
        let axle = DVec3::new(0.0, self.depth / 2.0, self.axle_height);

        let cheek = Node::hull([
            cube(self.cheek_thickness, self.depth, self.cheek_thickness)?,
            cylinder(self.depth / 2.0, self.cheek_thickness)?
                .rotated(DVec3::Y, 90.0)
                .translated(axle),
        ]);
        let far_cheek = cheek
            .clone()
            .translated(DVec3::new(self.cheek_thickness + self.gap, 0.0, 0.0));
        let base = cube(
            self.total_width,
            self.depth + self.flange * 2.0,
            self.cheek_thickness,
        )?
        .translated(DVec3::new(0.0, -self.flange, 0.0));
        let body = Node::union([base, cheek, far_cheek]);

        let mut cuts = vec![
            hole(
                self.bearing.inner_diameter / 2.0,
                self.total_width + 2.0 * offset,
                SCREW_TOLERANCE,
            )?
            .rotated(DVec3::Y, 90.0)
            .translated(axle + DVec3::new(-offset, 0.0, 0.0)),
            nut_trap(self.nut.width, self.nut.height)?
                .rotated(DVec3::Y, 90.0)
                .translated(axle + DVec3::new(self.total_width - self.nut.height, 0.0, 0.0)),
        ];
        let center_x = self.total_width / 2.0;
        for y in [-self.flange / 2.0, self.depth + self.flange / 2.0] {
            cuts.push(
                hole(
                    self.screw.outer_diameter / 2.0,
                    self.cheek_thickness + 2.0 * offset,
                    SCREW_TOLERANCE,
                )?
                .translated(DVec3::new(center_x, y, -offset)),
            );
        }

        Ok(body.subtract_all(cuts))
    }
}

impl Part for YBearingMount {
    fn name(&self) -> &'static str {
        PartKind::YBearingMount.name()
    }

    fn construction(&self) -> &Node {
        &self.construction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hbot_catalog::{DimensionRecord, StandardCatalog};

    use crate::error::PartError;

    #[test]
    fn test_623_idler() {
        let mount =
            YBearingMount::new(&StandardCatalog::builtin(), &YBearingMountConfig::default())
                .unwrap();
        assert_relative_eq!(mount.gap, 5.0);
        assert_relative_eq!(mount.depth, 19.6, epsilon = 1e-12);
        assert_relative_eq!(mount.axle_height, 10.8, epsilon = 1e-12);
        assert_relative_eq!(mount.total_width, 14.6, epsilon = 1e-12);
        // axle, nut trap, two flange holes
        assert_eq!(mount.construction().children().len(), 1 + 4);
    }

    #[test]
    fn test_bearing_fits_between_cheeks() {
        let mount =
            YBearingMount::new(&StandardCatalog::builtin(), &YBearingMountConfig::default())
                .unwrap();
        assert!(mount.gap > mount.bearing.width);
        assert!(mount.axle_height - mount.bearing.outer_diameter / 2.0 > mount.cheek_thickness);
    }

    #[test]
    fn test_missing_idler_size() {
        let catalog = StandardCatalog::builtin();
        let config = YBearingMountConfig {
            idler_bearing: "699".to_string(),
            ..YBearingMountConfig::default()
        };
        let err = YBearingMount::new(&catalog, &config).unwrap_err();
        assert!(matches!(err, PartError::Catalog(_)));
    }

    #[test]
    fn test_mock_catalog_with_only_needed_records() {
        let catalog = StandardCatalog::empty()
            .with(
                "tiny",
                DimensionRecord::Bearing(Bearing {
                    inner_diameter: 2.0,
                    outer_diameter: 6.0,
                    width: 2.5,
                }),
            )
            .unwrap()
            .with(
                "M2",
                DimensionRecord::Screw(Screw {
                    outer_diameter: 2.0,
                    head_diameter: 3.8,
                    head_height: 2.0,
                }),
            )
            .unwrap()
            .with(
                "M2",
                DimensionRecord::Nut(Nut {
                    width: 4.0,
                    height: 1.6,
                    diameter: 2.0,
                }),
            )
            .unwrap();
        let config = YBearingMountConfig {
            idler_bearing: "tiny".to_string(),
            screw: "M2".to_string(),
            ..YBearingMountConfig::default()
        };
        let mount = YBearingMount::new(&catalog, &config).unwrap();
        assert_relative_eq!(mount.gap, 3.5);
        assert_relative_eq!(mount.depth, 12.4, epsilon = 1e-12);
    }
}
