//! Tests for the standard catalog.

use super::*;

#[test]
fn test_lm8uu_dimensions() {
    let catalog = StandardCatalog::builtin();
    let lm8uu = catalog.linear_bearing("LM8UU").unwrap();
    assert_eq!(lm8uu.outer_diameter, 15.0);
    assert_eq!(lm8uu.length, 24.0);
    assert_eq!(lm8uu.inner_diameter, 8.0);
}

#[test]
fn test_unknown_size_fails() {
    let catalog = StandardCatalog::builtin();
    let err = catalog.linear_bearing("LM00XX").unwrap_err();
    match err {
        CatalogError::UnknownSize { family, size } => {
            assert_eq!(family, Family::LinearBearing);
            assert_eq!(size, "LM00XX");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_same_size_name_in_different_families() {
    let catalog = StandardCatalog::builtin();
    assert_eq!(catalog.screw("M3").unwrap().outer_diameter, 3.0);
    assert_eq!(catalog.nut("M3").unwrap().height, 2.4);
    assert_eq!(catalog.lock_nut("M3").unwrap().height, 4.0);
}

#[test]
fn test_every_stock_record_is_valid() {
    for (size, record) in tables::stock() {
        record.validate(size).unwrap();
    }
    assert_eq!(StandardCatalog::builtin().len(), tables::stock().len());
}

#[test]
fn test_every_family_has_stock_sizes() {
    let catalog = StandardCatalog::builtin();
    for family in Family::ALL {
        assert!(!catalog.sizes(family).is_empty(), "no stock {family}");
    }
}

#[test]
fn test_stepper_and_belt_lookups() {
    let catalog = StandardCatalog::builtin();
    let nema17 = catalog.stepper("GenericNEMA17").unwrap();
    assert_eq!(nema17.hole_spacing, 31.0);
    assert_eq!(nema17.screw_size, "M3");
    assert_eq!(catalog.belt("GT2").unwrap().pitch, 2.0);
    assert_eq!(catalog.bearing("623").unwrap().outer_diameter, 10.0);
}

#[test]
fn test_empty_catalog_used_as_mock() {
    let catalog = StandardCatalog::empty()
        .with(
            "LMTEST",
            DimensionRecord::LinearBearing(LinearBearing {
                inner_diameter: 1.0,
                outer_diameter: 2.0,
                length: 3.0,
            }),
        )
        .unwrap();
    assert_eq!(catalog.len(), 1);
    assert!(catalog.linear_bearing("LMTEST").is_ok());
    assert!(catalog.linear_bearing("LM8UU").is_err());
}

#[test]
fn test_insert_rejects_negative_record() {
    let mut catalog = StandardCatalog::empty();
    let result = catalog.insert(
        "bad",
        DimensionRecord::Screw(Screw {
            outer_diameter: -3.0,
            head_diameter: 5.5,
            head_height: 3.0,
        }),
    );
    assert!(matches!(result, Err(CatalogError::InvalidRecord { .. })));
    assert!(catalog.is_empty());
}

#[test]
fn test_json_table_parses() {
    let json = r#"{
        "linear_bearing": {
            "LM8LUU": { "inner_diameter": 8, "outer_diameter": 15, "length": 45 }
        },
        "lock_nut": {
            "M3": { "width": 5.5, "height": 4, "diameter": 3 }
        }
    }"#;
    let catalog = StandardCatalog::from_json(json).unwrap();
    assert_eq!(catalog.linear_bearing("LM8LUU").unwrap().length, 45.0);
    assert_eq!(catalog.lock_nut("M3").unwrap().height, 4.0);
    assert!(catalog.nut("M3").is_err());
}

#[test]
fn test_json_table_rejects_unknown_family() {
    let err = StandardCatalog::from_json(r#"{ "washer": {} }"#).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn test_json_table_rejects_negative_values() {
    let json = r#"{ "belt": { "GT2": { "pitch": 2, "width": 6, "thickness": -1, "tooth_height": 0.75 } } }"#;
    assert!(matches!(
        StandardCatalog::from_json(json),
        Err(CatalogError::InvalidRecord { .. })
    ));
}

#[test]
fn test_extend_overrides_stock() {
    let mut catalog = StandardCatalog::builtin();
    let before = catalog.len();
    let json = r#"{ "nut": { "M3": { "width": 5.7, "height": 2.5, "diameter": 3 } } }"#;
    catalog.extend(StandardCatalog::from_json(json).unwrap());
    assert_eq!(catalog.len(), before);
    assert_eq!(catalog.nut("M3").unwrap().width, 5.7);
}
