//! # Scene Export
//!
//! Serializes a [`Node`] tree into the declarative scene format read by the
//! external CAD compiler.
//!
//! ## Format
//!
//! Every node is either a primitive record
//!
//! ```json
//! {
//!   "kind": "hole",
//!   "dimensions": { "radius": 1.5, "height": 3.2 },
//!   "location": [10.0, 5.0, -0.1],
//!   "rotation": { "axis": [0.0, 0.0, 1.0], "angle": 0.0 },
//!   "centered": [true, true, false],
//!   "tolerance": 0.0
//! }
//! ```
//!
//! or a composite record `{ "operator": "difference", "children": [...] }`.
//!
//! Composite placements are folded into the leaves on export, so only
//! primitive records carry a location and rotation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CsgResult;
use crate::node::{Node, Operator};
use crate::primitive::{Primitive, Shape};
use crate::transform::Placement;

// =============================================================================
// RECORDS
// =============================================================================

/// One node of an exported scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SceneNode {
    /// Boolean combination.
    Composite(CompositeRecord),
    /// Leaf solid.
    Primitive(PrimitiveRecord),
}

/// Boolean combination of child records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeRecord {
    pub operator: Operator,
    pub children: Vec<SceneNode>,
}

/// Primitive kind as written to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    Cube,
    Cylinder,
    Cone,
    #[serde(rename = "ngon")]
    NGon,
    Hole,
}

/// Size parameters of a primitive record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimensions {
    Cube {
        size: [f64; 3],
    },
    Cone {
        radius1: f64,
        radius2: f64,
        height: f64,
    },
    NGon {
        apothem: f64,
        sides: u32,
        height: f64,
    },
    /// Cylinders and holes.
    Round {
        radius: f64,
        height: f64,
    },
}

/// Axis/angle rotation, angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationRecord {
    pub axis: [f64; 3],
    pub angle: f64,
}

/// Fully placed leaf solid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveRecord {
    pub kind: PrimitiveKind,
    pub dimensions: Dimensions,
    pub location: [f64; 3],
    pub rotation: RotationRecord,
    pub centered: [bool; 3],
    pub tolerance: f64,
}

impl PrimitiveRecord {
    fn from_primitive(primitive: &Primitive, placement: &Placement) -> Self {
        let (kind, dimensions) = match &primitive.shape {
            Shape::Cube { size } => (
                PrimitiveKind::Cube,
                Dimensions::Cube {
                    size: size.to_array(),
                },
            ),
            Shape::Cylinder { radius, height } => (
                PrimitiveKind::Cylinder,
                Dimensions::Round {
                    radius: *radius,
                    height: *height,
                },
            ),
            Shape::Hole { radius, height } => (
                PrimitiveKind::Hole,
                Dimensions::Round {
                    radius: *radius,
                    height: *height,
                },
            ),
            Shape::Cone {
                radius1,
                radius2,
                height,
            } => (
                PrimitiveKind::Cone,
                Dimensions::Cone {
                    radius1: *radius1,
                    radius2: *radius2,
                    height: *height,
                },
            ),
            Shape::NGon {
                apothem,
                sides,
                height,
            } => (
                PrimitiveKind::NGon,
                Dimensions::NGon {
                    apothem: *apothem,
                    sides: *sides,
                    height: *height,
                },
            ),
        };
        Self {
            kind,
            dimensions,
            location: placement.location.to_array(),
            rotation: RotationRecord {
                axis: placement.rotation.axis.to_array(),
                angle: placement.rotation.angle,
            },
            centered: primitive.centered,
            tolerance: primitive.tolerance,
        }
    }
}

// =============================================================================
// EXPORT
// =============================================================================

/// Converts a node tree into scene records.
pub fn to_scene(node: &Node) -> SceneNode {
    record(node, &Placement::IDENTITY)
}

fn record(node: &Node, outer: &Placement) -> SceneNode {
    match node {
        Node::Primitive(p) => {
            SceneNode::Primitive(PrimitiveRecord::from_primitive(p, &p.placement.then(outer)))
        }
        Node::Composite(c) => {
            let inner = c.placement.then(outer);
            SceneNode::Composite(CompositeRecord {
                operator: c.operator,
                children: c.children.iter().map(|child| record(child, &inner)).collect(),
            })
        }
    }
}

/// Pretty-printed JSON for `node`. Identical trees give identical text.
pub fn to_json(node: &Node) -> CsgResult<String> {
    Ok(serde_json::to_string_pretty(&to_scene(node))?)
}

/// Parses a scene previously produced by [`to_json`].
pub fn from_json(json: &str) -> CsgResult<SceneNode> {
    Ok(serde_json::from_str(json)?)
}

/// Writes the scene for `node` to `path`.
///
/// The whole scene is serialized before the file is created, so a failure
/// leaves no partial file behind.
pub fn write_scene(node: &Node, path: impl AsRef<Path>) -> CsgResult<()> {
    let path = path.as_ref();
    let json = to_json(node)?;
    std::fs::write(path, json)?;
    debug!(path = %path.display(), primitives = node.primitive_count(), "scene written");
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec3;

    fn cube(edge: f64) -> Node {
        Primitive::cube(DVec3::splat(edge)).unwrap().into()
    }

    #[test]
    fn test_primitive_record_fields() {
        let hole: Node = Primitive::hole(1.5, 3.2)
            .unwrap()
            .with_tolerance(0.2)
            .unwrap()
            .into();
        let scene = to_scene(&hole.translated(DVec3::new(10.0, 5.0, -0.1)));
        let SceneNode::Primitive(record) = scene else {
            panic!("expected a primitive record");
        };
        assert_eq!(record.kind, PrimitiveKind::Hole);
        assert_eq!(
            record.dimensions,
            Dimensions::Round {
                radius: 1.5,
                height: 3.2
            }
        );
        assert_eq!(record.location, [10.0, 5.0, -0.1]);
        assert_eq!(record.rotation.axis, [0.0, 0.0, 1.0]);
        assert_eq!(record.rotation.angle, 0.0);
        assert_eq!(record.centered, [true, true, false]);
        assert_eq!(record.tolerance, 0.2);
    }

    #[test]
    fn test_composite_placement_pushed_to_leaves() {
        let pair = Node::union([cube(1.0), cube(1.0).translated(DVec3::X * 3.0)]);
        let scene = to_scene(&pair.translated(DVec3::new(0.0, 10.0, 0.0)));
        let SceneNode::Composite(record) = scene else {
            panic!("expected a composite record");
        };
        assert_eq!(record.operator, Operator::Union);
        let locations: Vec<[f64; 3]> = record
            .children
            .iter()
            .map(|child| match child {
                SceneNode::Primitive(p) => p.location,
                SceneNode::Composite(_) => panic!("expected leaves"),
            })
            .collect();
        assert_eq!(locations, vec![[0.0, 10.0, 0.0], [3.0, 10.0, 0.0]]);
    }

    #[test]
    fn test_rotated_composite_rotates_leaves() {
        let pair = Node::union([cube(1.0), cube(1.0).translated(DVec3::X * 3.0)]);
        let scene = to_scene(&pair.rotated(DVec3::Z, 90.0));
        let SceneNode::Composite(record) = scene else {
            panic!("expected a composite record");
        };
        let SceneNode::Primitive(moved) = &record.children[1] else {
            panic!("expected a leaf");
        };
        assert_relative_eq!(moved.location[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(moved.location[1], 3.0, epsilon = 1e-12);
        assert_eq!(moved.rotation.angle, 90.0);
    }

    #[test]
    fn test_json_uses_scene_names() {
        let prism: Node = Primitive::ngon(2.75, 6, 2.5).unwrap().into();
        let json = to_json(&Node::hull([prism, cube(1.0)])).unwrap();
        assert!(json.contains("\"operator\": \"hull\""));
        assert!(json.contains("\"kind\": \"ngon\""));
        assert!(json.contains("\"apothem\": 2.75"));
        assert!(json.contains("\"size\""));
    }

    #[test]
    fn test_scene_parses_back() {
        let cone: Node = Primitive::cone(3.0, 1.5, 2.0).unwrap().into();
        let part = cube(10.0).subtract(cone.translated(DVec3::new(5.0, 5.0, 8.0)));
        let json = to_json(&part).unwrap();
        assert_eq!(from_json(&json).unwrap(), to_scene(&part));
    }

    #[test]
    fn test_write_scene_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cube.json");
        write_scene(&cube(2.0), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_json(&cube(2.0)).unwrap());
    }

    #[test]
    fn test_write_scene_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("cube.json");
        assert!(write_scene(&cube(2.0), &path).is_err());
        assert!(!path.exists());
    }
}
