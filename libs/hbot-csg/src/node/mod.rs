//! # Composite Nodes
//!
//! Boolean composition of primitives and sub-trees.
//!
//! ## Operations
//!
//! - [`Node::union`] - Combine geometries
//! - [`Node::hull`] - Convex hull of all operands
//! - [`Node::intersection`] - Keep only the overlapping region
//! - [`Node::subtract`] - Cut an operand out of the accumulated solid
//!
//! ## Ordering
//!
//! A part is always composed structure first: union and hull every solid,
//! then subtract every clearance from that result. A cut made before a hull
//! is re-covered by the hull.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use hbot_csg::{Node, Primitive};
//!
//! let a: Node = Primitive::cube(DVec3::splat(2.0)).unwrap().into();
//! let b = a.clone().translated(DVec3::new(4.0, 0.0, 0.0));
//! let plate = Node::hull([a, b]);
//! let bbox = plate.bounding_box();
//! assert_eq!(bbox.max.x, 6.0);
//! ```

use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use config::constants::EPSILON_TOLERANCE;

use crate::bounds::BoundingBox;
use crate::primitive::Primitive;
use crate::transform::{Placement, Rotation};

// =============================================================================
// OPERATOR
// =============================================================================

/// Boolean operator of a composite node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Set union of all children.
    Union,
    /// First child minus every following child, left to right.
    Difference,
    /// Set intersection of all children.
    Intersection,
    /// Convex hull of the union of all children.
    Hull,
}

// =============================================================================
// NODES
// =============================================================================

/// Boolean combination of child nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    /// How the children are combined.
    pub operator: Operator,
    /// Operands, in order.
    pub children: Vec<Node>,
    /// Placement of the whole sub-tree in the parent frame.
    pub placement: Placement,
}

impl Composite {
    fn new(operator: Operator, children: Vec<Node>) -> Self {
        Self {
            operator,
            children,
            placement: Placement::IDENTITY,
        }
    }
}

/// A node of the CSG tree.
///
/// Nodes are owned values: combining nodes moves them into the parent and
/// [`Clone`] produces a fully independent copy.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Leaf solid.
    Primitive(Primitive),
    /// Boolean combination.
    Composite(Composite),
}

impl From<Primitive> for Node {
    fn from(primitive: Primitive) -> Self {
        Node::Primitive(primitive)
    }
}

impl From<Composite> for Node {
    fn from(composite: Composite) -> Self {
        Node::Composite(composite)
    }
}

impl Node {
    // =========================================================================
    // PLACEMENT
    // =========================================================================

    /// Placement of this node in its parent frame.
    pub fn placement(&self) -> &Placement {
        match self {
            Node::Primitive(p) => &p.placement,
            Node::Composite(c) => &c.placement,
        }
    }

    fn placement_mut(&mut self) -> &mut Placement {
        match self {
            Node::Primitive(p) => &mut p.placement,
            Node::Composite(c) => &mut c.placement,
        }
    }

    fn moved(mut self, outer: &Placement) -> Self {
        let placement = self.placement().then(outer);
        *self.placement_mut() = placement;
        self
    }

    /// Moves the node by `offset` in the parent frame.
    pub fn translated(self, offset: DVec3) -> Self {
        self.moved(&Placement::from_location(offset))
    }

    /// Rotates the node, including its current location, about the parent
    /// origin.
    pub fn rotated(self, axis: DVec3, angle: f64) -> Self {
        self.moved(&Placement::from_rotation(axis, angle))
    }

    /// Sets the absolute location, keeping the current rotation.
    pub fn at(mut self, location: DVec3) -> Self {
        self.placement_mut().location = location;
        self
    }

    /// Current rotation.
    pub fn rotation(&self) -> Rotation {
        self.placement().rotation
    }

    // =========================================================================
    // COMBINATORS
    // =========================================================================

    /// Union of `nodes`. A single operand is returned unchanged and nested
    /// unpositioned unions are flattened.
    pub fn union(nodes: impl IntoIterator<Item = Node>) -> Node {
        Self::associative(Operator::Union, nodes)
    }

    /// Intersection of `nodes`, with the same flattening rules as
    /// [`Node::union`].
    pub fn intersection(nodes: impl IntoIterator<Item = Node>) -> Node {
        Self::associative(Operator::Intersection, nodes)
    }

    /// Convex hull of `nodes`.
    pub fn hull(nodes: impl IntoIterator<Item = Node>) -> Node {
        Node::Composite(Composite::new(Operator::Hull, nodes.into_iter().collect()))
    }

    /// Union of `self` and `other`.
    pub fn union_with(self, other: impl Into<Node>) -> Node {
        Self::union([self, other.into()])
    }

    /// Cuts `hole` out of `self`.
    ///
    /// Repeated cuts accumulate left to right into one difference node.
    /// Cutting the same operand twice leaves the tree unchanged, and an
    /// operand whose extents cannot overlap the accumulated solid is dropped.
    pub fn subtract(self, hole: impl Into<Node>) -> Node {
        let hole = hole.into();
        let mut difference = match self {
            Node::Composite(c) if c.operator == Operator::Difference && c.placement.is_identity() => c,
            base => Composite::new(Operator::Difference, vec![base]),
        };

        let base_bbox = match difference.children.first() {
            Some(base) => base.bounding_box(),
            None => BoundingBox::empty(),
        };
        if difference.children.iter().skip(1).any(|existing| existing == &hole) {
            debug!("skipping repeated subtrahend");
        } else if !base_bbox.overlaps_volume(&hole.bounding_box(), EPSILON_TOLERANCE) {
            debug!(kind = hole.describe(), "dropping subtrahend outside the solid");
        } else {
            difference.children.push(hole);
        }

        if difference.children.len() == 1 {
            difference.children.pop().unwrap_or_else(|| Node::union([]))
        } else {
            Node::Composite(difference)
        }
    }

    /// Cuts every node of `holes` out of `self`, in order.
    pub fn subtract_all(self, holes: impl IntoIterator<Item = Node>) -> Node {
        holes.into_iter().fold(self, |acc, hole| acc.subtract(hole))
    }

    fn associative(operator: Operator, nodes: impl IntoIterator<Item = Node>) -> Node {
        let mut children = Vec::new();
        for node in nodes {
            match node {
                Node::Composite(c) if c.operator == operator && c.placement.is_identity() => {
                    children.extend(c.children)
                }
                other => children.push(other),
            }
        }
        if children.len() == 1 {
            if let Some(only) = children.pop() {
                return only;
            }
        }
        Node::Composite(Composite::new(operator, children))
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Operator for composites, `None` for primitives.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Node::Primitive(_) => None,
            Node::Composite(c) => Some(c.operator),
        }
    }

    /// Direct children; empty for primitives.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Primitive(_) => &[],
            Node::Composite(c) => &c.children,
        }
    }

    /// Number of leaf primitives in the tree.
    pub fn primitive_count(&self) -> usize {
        match self {
            Node::Primitive(_) => 1,
            Node::Composite(c) => c.children.iter().map(Node::primitive_count).sum(),
        }
    }

    /// Conservative extents in the parent frame.
    ///
    /// Unions and hulls merge their children's boxes, intersections keep the
    /// common region and differences keep the extents of their base.
    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Node::Primitive(p) => p.bounding_box(),
            Node::Composite(c) => {
                let local = match c.operator {
                    Operator::Union | Operator::Hull => c
                        .children
                        .iter()
                        .fold(BoundingBox::empty(), |acc, child| acc.union(&child.bounding_box())),
                    Operator::Intersection => {
                        let mut boxes = c.children.iter().map(Node::bounding_box);
                        match boxes.next() {
                            Some(first) => boxes.fold(first, |acc, b| acc.intersection(&b)),
                            None => BoundingBox::empty(),
                        }
                    }
                    Operator::Difference => c
                        .children
                        .first()
                        .map(Node::bounding_box)
                        .unwrap_or_else(BoundingBox::empty),
                };
                local.transformed(&c.placement)
            }
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Node::Primitive(p) => p.shape.kind_name(),
            Node::Composite(c) => match c.operator {
                Operator::Union => "union",
                Operator::Difference => "difference",
                Operator::Intersection => "intersection",
                Operator::Hull => "hull",
            },
        }
    }
}
