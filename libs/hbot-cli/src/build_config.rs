//! # Build Configuration
//!
//! What a run generates and where it goes. Every key is optional; an empty
//! file (or no file at all) describes the stock machine with every part.
//!
//! ```json
//! {
//!   "machine": { "rod_spacing": 50, "stepper": "GenericNEMA23" },
//!   "parts": ["xcarriage", "beltclamp"],
//!   "output_dir": "./scenes",
//!   "compiler": "textcad",
//!   "compile": true
//! }
//! ```

use std::path::{Path, PathBuf};

use config::constants::{DEFAULT_COMPILER, DEFAULT_OUTPUT_DIR};
use hbot_parts::{MachineConfig, PartKind};
use serde::{Deserialize, Serialize};

use crate::args::Args;
use crate::error::{DriverError, DriverResult};

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    pub machine: MachineConfig,
    /// Part names to generate.
    pub parts: Vec<String>,
    pub output_dir: PathBuf,
    /// Program launched with each scene file as its only argument.
    pub compiler: String,
    pub compile: bool,
    /// Extra catalog table merged over the built-in one.
    pub catalog: Option<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            machine: MachineConfig::default(),
            parts: PartKind::ALL.iter().map(|kind| kind.name().to_string()).collect(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            compiler: DEFAULT_COMPILER.to_string(),
            compile: true,
            catalog: None,
        }
    }
}

impl BuildConfig {
    /// Reads a build configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> DriverResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DriverError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| DriverError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Configuration for `args`: the `--config` file or the defaults, with
    /// every command-line option applied on top.
    pub fn from_args(args: &Args) -> DriverResult<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(catalog) = &args.catalog {
            config.catalog = Some(catalog.clone());
        }
        if let Some(out) = &args.out {
            config.output_dir = out.clone();
        }
        if args.no_compile {
            config.compile = false;
        }
        if !args.parts.is_empty() {
            config.parts = args.parts.clone();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_part() {
        let config = BuildConfig::default();
        assert_eq!(config.parts.len(), PartKind::ALL.len());
        assert_eq!(config.output_dir, PathBuf::from("./json"));
        assert_eq!(config.compiler, "textcad");
        assert!(config.compile);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: BuildConfig =
            serde_json::from_str(r#"{ "machine": { "belt": "T5" }, "compile": false }"#).unwrap();
        assert_eq!(config.machine.belt, "T5");
        assert_eq!(config.machine.screw, "M3");
        assert!(!config.compile);
        assert_eq!(config.parts.len(), 10);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(serde_json::from_str::<BuildConfig>(r#"{ "outdir": "x" }"#).is_err());
    }

    #[test]
    fn test_command_line_overrides() {
        let args = Args {
            out: Some(PathBuf::from("scenes")),
            no_compile: true,
            parts: vec!["beltclamp".to_string()],
            ..Args::default()
        };
        let config = BuildConfig::from_args(&args).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("scenes"));
        assert!(!config.compile);
        assert_eq!(config.parts, ["beltclamp"]);
    }
}
