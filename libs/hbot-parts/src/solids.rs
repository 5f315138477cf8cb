//! Shorthand constructors used by the generators.

use glam::DVec3;
use hbot_csg::{Node, Primitive};

use crate::error::PartResult;

pub(crate) fn cube(x: f64, y: f64, z: f64) -> PartResult<Node> {
    Ok(Primitive::cube(DVec3::new(x, y, z))?.into())
}

pub(crate) fn cylinder(radius: f64, height: f64) -> PartResult<Node> {
    Ok(Primitive::cylinder(radius, height)?.into())
}

pub(crate) fn cone(radius1: f64, radius2: f64, height: f64) -> PartResult<Node> {
    Ok(Primitive::cone(radius1, radius2, height)?.into())
}

/// Subtraction cylinder with a radial clearance.
pub(crate) fn hole(radius: f64, height: f64, tolerance: f64) -> PartResult<Node> {
    Ok(Primitive::hole(radius, height)?.with_tolerance(tolerance)?.into())
}
