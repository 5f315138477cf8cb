//! # Driver
//!
//! Runs a [`BuildConfig`]: builds each part, writes its scene file and
//! launches the compiler on it.
//!
//! A failing part is reported and skipped; the remaining parts are still
//! generated. Compilers run concurrently while the remaining parts are
//! built; the run waits for all of them before it returns.

use std::path::{Path, PathBuf};
use std::process::{Child, Command};

use config::constants::SCENE_FILE_EXTENSION;
use hbot_catalog::{Catalog, StandardCatalog};
use hbot_csg::write_scene;
use hbot_parts::{build_part, PartKind};
use tracing::{info, warn};

use crate::build_config::BuildConfig;
use crate::error::{DriverError, DriverResult};

/// Outcome of a run.
#[derive(Debug, Default)]
pub struct Report {
    /// Scene files written, in part order.
    pub written: Vec<PathBuf>,
    /// Parts that produced no scene file.
    pub failed: Vec<(String, DriverError)>,
    /// Compiler launches that failed.
    pub spawn_failures: usize,
    /// Compilers that exited unsuccessfully or could not be waited on.
    pub compiler_failures: usize,
}

impl Report {
    /// True when every requested part was written.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Built-in catalog, extended with the configured table if any.
pub fn load_catalog(config: &BuildConfig) -> DriverResult<StandardCatalog> {
    let mut catalog = StandardCatalog::builtin();
    if let Some(path) = &config.catalog {
        catalog.extend(StandardCatalog::load(path)?);
        info!(path = %path.display(), "catalog overrides loaded");
    }
    Ok(catalog)
}

/// Generates every part of `config`.
pub fn run(config: &BuildConfig, catalog: &dyn Catalog) -> Report {
    let mut report = Report::default();
    let mut compilers = Vec::new();
    for name in &config.parts {
        match export_part(name, config, catalog) {
            Ok(path) => {
                if config.compile {
                    match launch_compiler(&config.compiler, &path) {
                        Some(child) => compilers.push((path.clone(), child)),
                        None => report.spawn_failures += 1,
                    }
                }
                report.written.push(path);
            }
            Err(err) => {
                warn!(part = %name, error = %err, "part not generated");
                report.failed.push((name.clone(), err));
            }
        }
    }
    for (scene, child) in compilers {
        if !reap_compiler(&config.compiler, &scene, child) {
            report.compiler_failures += 1;
        }
    }
    report
}

/// Scene file path of `kind` under `dir`.
pub fn scene_path(dir: &Path, kind: PartKind) -> PathBuf {
    dir.join(kind.name()).with_extension(SCENE_FILE_EXTENSION)
}

fn export_part(name: &str, config: &BuildConfig, catalog: &dyn Catalog) -> DriverResult<PathBuf> {
    let kind: PartKind = name.parse()?;
    let part = build_part(kind, catalog, &config.machine)?;

    let dir = &config.output_dir;
    std::fs::create_dir_all(dir).map_err(|source| DriverError::OutputDir {
        path: dir.clone(),
        source,
    })?;
    let path = scene_path(dir, kind);
    write_scene(part.construction(), &path).map_err(|source| DriverError::Export {
        path: path.clone(),
        source,
    })?;
    info!(
        part = kind.name(),
        path = %path.display(),
        primitives = part.construction().primitive_count(),
        "scene exported"
    );
    Ok(path)
}

fn launch_compiler(compiler: &str, scene: &Path) -> Option<Child> {
    match Command::new(compiler).arg(scene).spawn() {
        Ok(child) => {
            info!(compiler, pid = child.id(), scene = %scene.display(), "compiler launched");
            Some(child)
        }
        Err(err) => {
            warn!(compiler, scene = %scene.display(), error = %err, "compiler launch failed");
            None
        }
    }
}

fn reap_compiler(compiler: &str, scene: &Path, mut child: Child) -> bool {
    match child.wait() {
        Ok(status) if status.success() => true,
        Ok(status) => {
            warn!(compiler, scene = %scene.display(), %status, "compiler failed");
            false
        }
        Err(err) => {
            warn!(compiler, scene = %scene.display(), error = %err, "compiler wait failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_path_uses_part_name() {
        let path = scene_path(Path::new("out"), PartKind::YCarriageEndCap);
        assert_eq!(path, Path::new("out").join("ycarriageendcap.json"));
    }

    #[test]
    fn test_unknown_part_name_is_reported() {
        let config = BuildConfig {
            parts: vec!["zcarriage".to_string()],
            compile: false,
            ..BuildConfig::default()
        };
        let report = run(&config, &StandardCatalog::builtin());
        assert!(report.written.is_empty());
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].1.to_string(), "unknown part 'zcarriage'");
    }

    #[cfg(unix)]
    fn compiling(dir: &Path, compiler: &str) -> BuildConfig {
        BuildConfig {
            parts: vec!["beltclamp".to_string(), "yrodmount".to_string()],
            output_dir: dir.to_path_buf(),
            compiler: compiler.to_string(),
            compile: true,
            ..BuildConfig::default()
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_compilers_are_waited_for() {
        let dir = tempfile::tempdir().unwrap();
        let report = run(&compiling(dir.path(), "true"), &StandardCatalog::builtin());
        assert_eq!(report.written.len(), 2);
        assert_eq!(report.spawn_failures, 0);
        assert_eq!(report.compiler_failures, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_compiler_is_counted() {
        let dir = tempfile::tempdir().unwrap();
        let report = run(&compiling(dir.path(), "false"), &StandardCatalog::builtin());
        assert_eq!(report.written.len(), 2);
        assert_eq!(report.compiler_failures, 2);
        assert!(report.is_success());
    }
}
