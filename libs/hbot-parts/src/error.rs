//! # Error Types
//!
//! Errors raised while generating a part.
//!
//! Every failure aborts generation of the affected part before a scene
//! file is produced.

use config::constants::ConfigError;
use hbot_catalog::CatalogError;
use hbot_csg::CsgError;
use thiserror::Error;

/// Errors that can occur while generating a part.
#[derive(Error, Debug)]
pub enum PartError {
    /// A derived dimension came out negative or non-finite, meaning the
    /// chosen hardware and configuration do not fit together.
    #[error("{part}: derived {name} is invalid ({value})")]
    InvalidDimension {
        /// Part being generated.
        part: &'static str,
        /// Name of the derived dimension.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A hardware lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A primitive was rejected during construction.
    #[error(transparent)]
    Geometry(#[from] CsgError),

    /// The clearance settings are inconsistent.
    #[error("invalid machine configuration: {0}")]
    Config(#[from] ConfigError),

    /// No generator exists under this name.
    #[error("unknown part '{0}'")]
    UnknownPart(String),
}

/// Result type alias for part generation.
pub type PartResult<T> = Result<T, PartError>;
