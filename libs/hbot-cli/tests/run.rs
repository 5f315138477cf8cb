//! Generation runs against a temporary output directory.

use std::io::Write;

use clap::Parser;

use hbot_cli::{load_catalog, run, scene_path, Args, BuildConfig, DriverError};
use hbot_csg::{from_json, SceneNode};
use hbot_parts::PartKind;

fn quiet(dir: &std::path::Path) -> BuildConfig {
    BuildConfig {
        output_dir: dir.join("scenes"),
        compile: false,
        ..BuildConfig::default()
    }
}

#[test]
fn every_part_gets_a_scene_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = quiet(dir.path());
    let report = run(&config, &load_catalog(&config).unwrap());

    assert!(report.is_success());
    assert_eq!(report.written.len(), PartKind::ALL.len());
    for kind in PartKind::ALL {
        let path = scene_path(&config.output_dir, kind);
        let scene = from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(matches!(scene, SceneNode::Composite(_)), "{kind}");
    }
}

#[test]
fn unknown_size_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = quiet(dir.path());
    config.machine.linear_bearing = "LM00XX".to_string();
    config.parts = vec!["linearbearingholder".to_string(), "beltclamp".to_string()];

    let report = run(&config, &load_catalog(&config).unwrap());

    assert!(!report.is_success());
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "linearbearingholder");
    assert!(!scene_path(&config.output_dir, PartKind::LinearBearingHolder).exists());
    assert!(scene_path(&config.output_dir, PartKind::BeltClamp).exists());
}

#[test]
fn missing_compiler_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = BuildConfig {
        compiler: "hbot-no-such-compiler".to_string(),
        compile: true,
        parts: vec!["beltretainer".to_string()],
        ..quiet(dir.path())
    };
    let report = run(&config, &load_catalog(&config).unwrap());
    assert!(report.is_success());
    assert_eq!(report.spawn_failures, 1);
    assert_eq!(report.written.len(), 1);
}

#[test]
fn catalog_override_changes_the_part() {
    let dir = tempfile::tempdir().unwrap();
    let table = dir.path().join("catalog.json");
    let mut file = std::fs::File::create(&table).unwrap();
    write!(
        file,
        r#"{{ "belt": {{ "GT2": {{ "pitch": 2, "width": 9, "thickness": 1.38, "tooth_height": 0.75 }} }} }}"#
    )
    .unwrap();

    let mut config = quiet(dir.path());
    config.catalog = Some(table);
    config.parts = vec!["beltclamp".to_string()];
    let report = run(&config, &load_catalog(&config).unwrap());
    assert!(report.is_success());

    let stock_dir = tempfile::tempdir().unwrap();
    let stock = BuildConfig {
        parts: vec!["beltclamp".to_string()],
        ..quiet(stock_dir.path())
    };
    run(&stock, &load_catalog(&stock).unwrap());

    let read = |config: &BuildConfig| {
        std::fs::read_to_string(scene_path(&config.output_dir, PartKind::BeltClamp)).unwrap()
    };
    assert_ne!(read(&config), read(&stock));
}

#[test]
fn config_file_and_flags_combine() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hbot.json");
    std::fs::write(&path, r#"{ "parts": ["xcarriage"], "compiler": "openscad" }"#).unwrap();

    let args =
        Args::try_parse_from(["hbot", "--config", path.to_str().unwrap(), "--no-compile"])
            .unwrap();
    let config = BuildConfig::from_args(&args).unwrap();
    assert_eq!(config.parts, ["xcarriage"]);
    assert_eq!(config.compiler, "openscad");
    assert!(!config.compile);
}

#[test]
fn broken_config_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hbot.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = BuildConfig::load(&path).unwrap_err();
    assert!(matches!(err, DriverError::Config { .. }));
    assert!(err.to_string().contains("hbot.json"));
}
