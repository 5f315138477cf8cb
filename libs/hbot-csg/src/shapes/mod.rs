//! # Clearance Shapes
//!
//! Parametric compound shapes reused across parts.
//!
//! ## Shapes
//!
//! - [`d_shape`] - Cylinder with one flat side extended into a box
//! - [`d_shape_negative`] - Same profile built on a hole, for cutting
//! - [`n_shape`] - Cylinder blended into two perpendicular faces
//! - [`nut_trap`] - Hexagonal pocket that stops a nut from turning
//! - [`nut_slot`] - Nut trap with a side channel for inserting the nut
//!
//! All shapes stand on `z = 0` and extend `length` (or the nut height)
//! along +Z with the round part centred on the Z axis.

use glam::DVec3;

use config::constants::NUT_TRAP_MARGIN;

use crate::error::CsgResult;
use crate::node::Node;
use crate::primitive::Primitive;

// =============================================================================
// D-SHAPES
// =============================================================================

/// Box of width `2 * radius` and depth `extension` standing on the
/// diameter line and reaching toward +Y.
fn flat_side(radius: f64, extension: f64, length: f64) -> CsgResult<Node> {
    let flat = Primitive::cube(DVec3::new(radius * 2.0, extension, length))?;
    Ok(Node::from(flat).at(DVec3::new(-radius, 0.0, 0.0)))
}

/// Cylinder of `radius` with one side flattened out to `extension` along +Y.
///
/// ## Example
///
/// ```rust
/// use hbot_csg::shapes::d_shape;
///
/// let tab = d_shape(4.0, 4.0, 4.8).unwrap();
/// let bbox = tab.bounding_box();
/// assert_eq!(bbox.min.y, -4.0);
/// assert_eq!(bbox.max.y, 4.0);
/// ```
pub fn d_shape(radius: f64, extension: f64, length: f64) -> CsgResult<Node> {
    let round = Primitive::cylinder(radius, length)?;
    Ok(Node::union([round.into(), flat_side(radius, extension, length)?]))
}

/// D-shape built on a hole, used when the flat-sided clearance itself is
/// the cutting operand.
pub fn d_shape_negative(radius: f64, extension: f64, length: f64) -> CsgResult<Node> {
    let round = Primitive::hole(radius, length)?;
    Ok(Node::union([round.into(), flat_side(radius, extension, length)?]))
}

// =============================================================================
// N-SHAPE
// =============================================================================

/// Cylinder blended into the +X and +Y directions with the corner between
/// them filled, giving a quarter-round scoop.
pub fn n_shape(radius: f64, extension: f64, length: f64) -> CsgResult<Node> {
    let round = Primitive::cylinder(radius, length)?;
    let toward_x = Primitive::cube(DVec3::new(extension, radius * 2.0, length))?;
    let corner = Primitive::cube(DVec3::new(extension, extension, length))?;
    Ok(Node::union([
        round.into(),
        flat_side(radius, extension, length)?,
        Node::from(toward_x).at(DVec3::new(0.0, -radius, 0.0)),
        corner.into(),
    ]))
}

// =============================================================================
// NUTS
// =============================================================================

/// Hexagonal pocket for a nut `width` across flats and `height` thick.
///
/// ## Example
///
/// ```rust
/// use hbot_csg::{shapes::nut_trap, Node, Shape};
///
/// let trap = nut_trap(5.5, 2.4).unwrap();
/// match trap {
///     Node::Primitive(p) => match p.shape {
///         Shape::NGon { apothem, sides, height } => {
///             assert_eq!(sides, 6);
///             assert_eq!(apothem, 2.75);
///             assert!((height - 2.5).abs() < 1e-12);
///         }
///         _ => panic!("expected a prism"),
///     },
///     _ => panic!("expected a primitive"),
/// }
/// ```
pub fn nut_trap(width: f64, height: f64) -> CsgResult<Node> {
    Ok(Primitive::ngon(width / 2.0, 6, height + NUT_TRAP_MARGIN)?.into())
}

/// Nut trap with a channel of `length` running along +X, wide enough to
/// slide the nut in from the side.
pub fn nut_slot(width: f64, height: f64, length: f64) -> CsgResult<Node> {
    let channel = Primitive::cube(DVec3::new(length, width, height + NUT_TRAP_MARGIN))?;
    Ok(Node::union([
        nut_trap(width, height)?,
        Node::from(channel).at(DVec3::new(0.0, -width / 2.0, 0.0)),
    ]))
}

#[cfg(test)]
mod tests;
