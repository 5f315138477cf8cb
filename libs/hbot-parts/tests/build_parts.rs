//! End-to-end part generation against the stock and mock catalogs.

use hbot_catalog::{
    CatalogError, DimensionRecord, Family, LinearBearing, StandardCatalog,
};
use hbot_csg::to_json;
use hbot_parts::parts::{LinearBearingHolderConfig, XCarriageConfig};
use hbot_parts::{
    build_part, LinearBearingHolder, MachineConfig, PartError, PartKind, XCarriage,
};

#[test]
fn every_part_builds_from_the_stock_machine() {
    let catalog = StandardCatalog::builtin();
    let machine = MachineConfig::default();
    for kind in PartKind::ALL {
        let part = build_part(kind, &catalog, &machine).unwrap();
        let root = part.construction();
        assert!(root.operator().is_some(), "{kind}");
        assert!(root.primitive_count() > 2, "{kind}");
        assert!(!root.bounding_box().is_empty(), "{kind}");
    }
}

#[test]
fn every_part_is_deterministic() {
    let catalog = StandardCatalog::builtin();
    let machine = MachineConfig::default();
    for kind in PartKind::ALL {
        let first = build_part(kind, &catalog, &machine).unwrap();
        let second = build_part(kind, &catalog, &machine).unwrap();
        assert_eq!(
            to_json(first.construction()).unwrap(),
            to_json(second.construction()).unwrap(),
            "{kind}"
        );
    }
}

#[test]
fn x_carriage_twice_gives_equal_scenes() {
    let catalog = StandardCatalog::builtin();
    let config = XCarriageConfig::default();
    let a = XCarriage::new(&catalog, &config).unwrap();
    let b = XCarriage::new(&catalog, &config).unwrap();
    assert_eq!(
        hbot_csg::to_scene(hbot_parts::Part::construction(&a)),
        hbot_csg::to_scene(hbot_parts::Part::construction(&b))
    );
}

#[test]
fn unknown_bearing_fails_before_geometry() {
    let config = LinearBearingHolderConfig {
        linear_bearing: "LM00XX".to_string(),
        ..LinearBearingHolderConfig::default()
    };
    let err = LinearBearingHolder::new(&StandardCatalog::builtin(), &config).unwrap_err();
    match err {
        PartError::Catalog(CatalogError::UnknownSize { family, size }) => {
            assert_eq!(family, Family::LinearBearing);
            assert_eq!(size, "LM00XX");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn holder_from_a_mock_catalog() {
    let catalog = StandardCatalog::empty()
        .with(
            "LM8UU",
            DimensionRecord::LinearBearing(LinearBearing {
                inner_diameter: 8.0,
                outer_diameter: 15.0,
                length: 24.0,
            }),
        )
        .unwrap();
    let holder = LinearBearingHolder::new(&catalog, &LinearBearingHolderConfig::default()).unwrap();
    assert_eq!(holder.length, 31.5);
    assert_eq!(holder.width, 22.5);
    assert_eq!(holder.bearing_center, 13.25);
    assert_eq!(holder.height, 17.0);
}

#[test]
fn machine_without_the_stepper_reports_it() {
    let catalog = StandardCatalog::builtin();
    let machine = MachineConfig {
        stepper: "NEMA99".to_string(),
        ..MachineConfig::default()
    };
    for kind in [PartKind::YRodMount, PartKind::MotorMount, PartKind::DrillTemplate] {
        let err = build_part(kind, &catalog, &machine).err().unwrap();
        assert!(
            matches!(
                err,
                PartError::Catalog(CatalogError::UnknownSize {
                    family: Family::Motor,
                    ..
                })
            ),
            "{kind}"
        );
    }
}

#[test]
fn cramped_rods_are_rejected() {
    let machine = MachineConfig {
        rod_spacing: 5.0,
        ..MachineConfig::default()
    };
    let err = build_part(PartKind::XCarriage, &StandardCatalog::builtin(), &machine)
        .err()
        .unwrap();
    assert!(matches!(err, PartError::InvalidDimension { part: "xcarriage", .. }));
}
