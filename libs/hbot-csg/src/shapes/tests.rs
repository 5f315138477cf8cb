//! Tests for the clearance shape library.

use super::*;
use crate::error::CsgError;
use crate::node::Operator;
use crate::primitive::Shape;
use approx::assert_relative_eq;

#[test]
fn test_d_shape_is_cylinder_plus_flat() {
    let shape = d_shape(3.0, 5.0, 10.0).unwrap();
    assert_eq!(shape.operator(), Some(Operator::Union));
    let children = shape.children();
    assert_eq!(children.len(), 2);
    assert!(matches!(
        &children[0],
        Node::Primitive(p) if matches!(p.shape, Shape::Cylinder { radius, .. } if radius == 3.0)
    ));
    let bbox = shape.bounding_box();
    assert_eq!(bbox.min, DVec3::new(-3.0, -3.0, 0.0));
    assert_eq!(bbox.max, DVec3::new(3.0, 5.0, 10.0));
}

#[test]
fn test_d_shape_negative_uses_hole() {
    let shape = d_shape_negative(4.5, 15.0, 31.7).unwrap();
    assert!(matches!(
        &shape.children()[0],
        Node::Primitive(p) if p.shape.is_hole()
    ));
}

#[test]
fn test_n_shape_reaches_both_faces() {
    let shape = n_shape(2.0, 6.0, 4.0).unwrap();
    assert_eq!(shape.primitive_count(), 4);
    let bbox = shape.bounding_box();
    assert_eq!(bbox.min, DVec3::new(-2.0, -2.0, 0.0));
    assert_eq!(bbox.max, DVec3::new(6.0, 6.0, 4.0));
}

#[test]
fn test_nut_trap_for_m3() {
    let trap = nut_trap(5.5, 2.4).unwrap();
    let Node::Primitive(p) = trap else {
        panic!("nut trap should be a single prism");
    };
    let Shape::NGon { apothem, sides, height } = p.shape else {
        panic!("nut trap should be an n-gon");
    };
    assert_eq!(sides, 6);
    assert_relative_eq!(apothem, 2.75);
    assert_relative_eq!(height, 2.5, epsilon = 1e-12);
}

#[test]
fn test_nut_slot_channel_runs_along_x() {
    let slot = nut_slot(5.5, 2.4, 10.0).unwrap();
    let bbox = slot.bounding_box();
    assert_relative_eq!(bbox.max.x, 10.0);
    assert_relative_eq!(bbox.max.z, 2.5, epsilon = 1e-12);
    assert_eq!(slot.primitive_count(), 2);
}

#[test]
fn test_negative_sizes_fail() {
    assert!(matches!(
        d_shape(-1.0, 2.0, 3.0),
        Err(CsgError::InvalidDimension { .. })
    ));
    assert!(nut_slot(5.5, 2.4, -1.0).is_err());
}
