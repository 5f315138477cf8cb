//! Algebraic properties of composed trees, checked through the public API.

use glam::DVec3;
use hbot_csg::shapes::{d_shape, nut_slot, nut_trap};
use hbot_csg::{to_json, Node, Primitive};

fn block() -> Node {
    Primitive::cube(DVec3::new(30.0, 20.0, 6.0)).unwrap().into()
}

fn bracket() -> Node {
    let lug = d_shape(4.0, 4.0, 6.0).unwrap().translated(DVec3::new(15.0, 20.0, 0.0));
    let body = Node::union([block(), lug]);
    body.subtract(
        nut_trap(5.5, 2.4)
            .unwrap()
            .translated(DVec3::new(15.0, 10.0, 3.6)),
    )
    .subtract(
        nut_slot(5.5, 2.4, 12.0)
            .unwrap()
            .translated(DVec3::new(5.0, 10.0, 1.0)),
    )
}

#[test]
fn identical_construction_gives_identical_scene() {
    assert_eq!(to_json(&bracket()).unwrap(), to_json(&bracket()).unwrap());
}

#[test]
fn moving_a_clone_leaves_the_original() {
    let original = bracket();
    let before = to_json(&original).unwrap();
    let moved = original
        .clone()
        .translated(DVec3::new(0.0, 0.0, 40.0))
        .rotated(DVec3::X, 90.0);
    assert_ne!(to_json(&moved).unwrap(), before);
    assert_eq!(to_json(&original).unwrap(), before);
}

#[test]
fn hull_covers_both_operands() {
    let a = bracket();
    let b = block().translated(DVec3::new(-10.0, 40.0, 2.0));
    let hull = Node::hull([a.clone(), b.clone()]).bounding_box();
    assert!(hull.contains(&a.bounding_box()));
    assert!(hull.contains(&b.bounding_box()));
}

#[test]
fn cutting_twice_changes_nothing() {
    let hole: Node = Primitive::hole(1.6, 6.2).unwrap().into();
    let hole = hole.translated(DVec3::new(10.0, 10.0, -0.1));
    let once = bracket().subtract(hole.clone());
    let twice = once.clone().subtract(hole);
    assert_eq!(once, twice);
    assert_eq!(to_json(&once).unwrap(), to_json(&twice).unwrap());
}

#[test]
fn union_of_single_shape_is_the_shape() {
    assert_eq!(Node::union([bracket()]), bracket());
}
