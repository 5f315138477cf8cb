//! # hbot Catalog
//!
//! Dimension tables for the off-the-shelf hardware an H-bot carriage is
//! built around.
//!
//! Part generators never reach for a global table: they receive a
//! `&dyn Catalog` and resolve every size name through it, so a test can hand
//! in a catalog holding nothing but the records it needs.
//!
//! ## Example
//!
//! ```rust
//! use hbot_catalog::{Catalog, StandardCatalog};
//!
//! let catalog = StandardCatalog::builtin();
//! let lm8uu = catalog.linear_bearing("LM8UU").unwrap();
//! assert_eq!(lm8uu.outer_diameter, 15.0);
//! assert!(catalog.linear_bearing("LM00XX").is_err());
//! ```

pub mod error;
pub mod family;
pub mod records;
pub mod standard;

pub use error::{CatalogError, CatalogResult};
pub use family::Family;
pub use records::{Bearing, Belt, DimensionRecord, LinearBearing, Nut, Screw, Stepper};
pub use standard::StandardCatalog;

/// Lookup contract between the part generators and a dimension table.
pub trait Catalog {
    /// Returns the record registered for `size` in `family`.
    ///
    /// ## Errors
    ///
    /// [`CatalogError::UnknownSize`] when `size` is not registered.
    fn lookup(&self, family: Family, size: &str) -> CatalogResult<DimensionRecord>;

    /// Radial ball bearing, e.g. `"623"`.
    fn bearing(&self, size: &str) -> CatalogResult<Bearing> {
        self.lookup(Family::Bearing, size)?.try_into()
    }

    /// Linear ball bearing, e.g. `"LM8UU"`.
    fn linear_bearing(&self, size: &str) -> CatalogResult<LinearBearing> {
        self.lookup(Family::LinearBearing, size)?.try_into()
    }

    /// Cap screw, e.g. `"M3"`.
    fn screw(&self, size: &str) -> CatalogResult<Screw> {
        self.lookup(Family::Screw, size)?.try_into()
    }

    /// Hex nut, e.g. `"M3"`.
    fn nut(&self, size: &str) -> CatalogResult<Nut> {
        self.lookup(Family::Nut, size)?.try_into()
    }

    /// Nylon-insert lock nut, e.g. `"M3"`.
    fn lock_nut(&self, size: &str) -> CatalogResult<Nut> {
        self.lookup(Family::LockNut, size)?.try_into()
    }

    /// Stepper motor, e.g. `"GenericNEMA17"`.
    fn stepper(&self, size: &str) -> CatalogResult<Stepper> {
        self.lookup(Family::Motor, size)?.try_into()
    }

    /// Timing belt, e.g. `"GT2"`.
    fn belt(&self, size: &str) -> CatalogResult<Belt> {
        self.lookup(Family::Belt, size)?.try_into()
    }
}
