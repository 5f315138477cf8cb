//! # hbot Driver
//!
//! Library side of the `hbot` binary: argument parsing, the build
//! configuration and the generation loop.
//!
//! ## Example
//!
//! ```rust,no_run
//! use hbot_cli::{load_catalog, run, BuildConfig};
//!
//! let config = BuildConfig { compile: false, ..BuildConfig::default() };
//! let catalog = load_catalog(&config).unwrap();
//! let report = run(&config, &catalog);
//! assert!(report.is_success());
//! ```

pub mod args;
pub mod build_config;
pub mod driver;
pub mod error;

pub use args::Args;
pub use build_config::BuildConfig;
pub use driver::{load_catalog, run, scene_path, Report};
pub use error::{DriverError, DriverResult};
