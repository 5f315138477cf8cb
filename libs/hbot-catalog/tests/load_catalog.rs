//! Loading catalog tables from disk.

use std::io::Write;

use hbot_catalog::{Catalog, CatalogError, StandardCatalog};

#[test]
fn load_table_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "motor": {{ "TinyStepper": {{
            "width": 20, "length": 30, "shaft_diameter": 4, "shaft_length": 10,
            "boss_diameter": 16, "boss_height": 1.5, "hole_spacing": 16, "screw_size": "M2"
        }} }} }}"#
    )
    .unwrap();

    let catalog = StandardCatalog::load(file.path()).unwrap();
    let stepper = catalog.stepper("TinyStepper").unwrap();
    assert_eq!(stepper.width, 20.0);
    assert_eq!(stepper.screw_size, "M2");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = StandardCatalog::load(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn catalog_behind_a_trait_object() {
    let builtin = StandardCatalog::builtin();
    let catalog: &dyn Catalog = &builtin;
    assert_eq!(catalog.linear_bearing("LM10UU").unwrap().outer_diameter, 19.0);
}
