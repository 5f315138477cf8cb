//! # hbot Parts
//!
//! Parametric generators for the printable parts of an H-bot carriage.
//!
//! ## Pipeline
//!
//! Every generator runs the same one-shot pipeline:
//!
//! 1. **Resolve** hardware records through the injected [`Catalog`]
//! 2. **Derive** secondary dimensions in closed form
//! 3. **Validate** them, failing with [`PartError::InvalidDimension`]
//! 4. **Combine** structural solids with union and hull
//! 5. **Subtract** every clearance from the combined body
//!
//! Sub-assemblies are reused by cloning another generator's tree and
//! placing the clone.
//!
//! ## Example
//!
//! ```rust
//! use hbot_catalog::StandardCatalog;
//! use hbot_parts::{build_part, MachineConfig, PartKind};
//!
//! let catalog = StandardCatalog::builtin();
//! let part = build_part(PartKind::XCarriage, &catalog, &MachineConfig::default()).unwrap();
//! assert_eq!(part.name(), "xcarriage");
//! assert!(part.construction().primitive_count() > 20);
//! ```
//!
//! [`Catalog`]: hbot_catalog::Catalog

pub mod derive;
pub mod error;
pub mod machine;
pub mod part;
pub mod parts;
mod solids;

pub use error::{PartError, PartResult};
pub use machine::MachineConfig;
pub use part::{build_part, Part, PartKind};
pub use parts::{
    BeltClamp, BeltRetainer, DrillTemplate, LinearBearingHolder, MotorMount, XCarriage,
    YBearingMount, YCarriage, YCarriageEndCap, YRodMount,
};
