//! # Error Types
//!
//! Errors raised by the driver. Failures of a single part are collected in
//! the run report instead of stopping the batch.

use std::path::PathBuf;

use hbot_catalog::CatalogError;
use hbot_csg::CsgError;
use hbot_parts::PartError;
use thiserror::Error;

/// Errors that can occur while driving a generation run.
#[derive(Error, Debug)]
pub enum DriverError {
    /// A configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The build configuration is not valid JSON for [`BuildConfig`].
    ///
    /// [`BuildConfig`]: crate::BuildConfig
    #[error("invalid build configuration {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A catalog table could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A part generator failed.
    #[error(transparent)]
    Part(#[from] PartError),

    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A scene could not be serialized or written.
    #[error("failed to export {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: CsgError,
    },
}

/// Result type alias for driver operations.
pub type DriverResult<T> = Result<T, DriverError>;
