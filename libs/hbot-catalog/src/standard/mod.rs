//! # Standard Catalog
//!
//! In-memory [`Catalog`] backed by a sorted map.
//!
//! ## File Format
//!
//! User tables are JSON objects keyed by family, then by size name:
//!
//! ```json
//! {
//!   "linear_bearing": {
//!     "LM8LUU": { "inner_diameter": 8, "outer_diameter": 15, "length": 45 }
//!   },
//!   "nut": {
//!     "M3": { "width": 5.5, "height": 2.4, "diameter": 3 }
//!   }
//! }
//! ```
//!
//! Every family key is optional. Unknown keys are rejected.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::family::Family;
use crate::records::{Bearing, Belt, DimensionRecord, LinearBearing, Nut, Screw, Stepper};
use crate::Catalog;

mod tables;

/// Catalog of named dimension records.
#[derive(Debug, Clone, Default)]
pub struct StandardCatalog {
    records: BTreeMap<(Family, String), DimensionRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CatalogFile {
    bearing: BTreeMap<String, Bearing>,
    linear_bearing: BTreeMap<String, LinearBearing>,
    screw: BTreeMap<String, Screw>,
    nut: BTreeMap<String, Nut>,
    lock_nut: BTreeMap<String, Nut>,
    motor: BTreeMap<String, Stepper>,
    belt: BTreeMap<String, Belt>,
}

impl StandardCatalog {
    /// Catalog with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Catalog pre-filled with stock hardware.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        for (size, record) in tables::stock() {
            catalog.records.insert((record.family(), size.to_string()), record);
        }
        catalog
    }

    /// Registers `record` under `size`, replacing any previous record of the
    /// same family and size.
    pub fn insert(&mut self, size: impl Into<String>, record: DimensionRecord) -> CatalogResult<()> {
        let size = size.into();
        record.validate(&size)?;
        self.records.insert((record.family(), size), record);
        Ok(())
    }

    /// Builder form of [`StandardCatalog::insert`].
    pub fn with(mut self, size: impl Into<String>, record: DimensionRecord) -> CatalogResult<Self> {
        self.insert(size, record)?;
        Ok(self)
    }

    /// Parses a JSON table. Every record is validated.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut catalog = Self::empty();

        let CatalogFile {
            bearing,
            linear_bearing,
            screw,
            nut,
            lock_nut,
            motor,
            belt,
        } = file;
        for (size, r) in bearing {
            catalog.insert(size, DimensionRecord::Bearing(r))?;
        }
        for (size, r) in linear_bearing {
            catalog.insert(size, DimensionRecord::LinearBearing(r))?;
        }
        for (size, r) in screw {
            catalog.insert(size, DimensionRecord::Screw(r))?;
        }
        for (size, r) in nut {
            catalog.insert(size, DimensionRecord::Nut(r))?;
        }
        for (size, r) in lock_nut {
            catalog.insert(size, DimensionRecord::LockNut(r))?;
        }
        for (size, r) in motor {
            catalog.insert(size, DimensionRecord::Motor(r))?;
        }
        for (size, r) in belt {
            catalog.insert(size, DimensionRecord::Belt(r))?;
        }

        debug!(records = catalog.len(), "catalog parsed");
        Ok(catalog)
    }

    /// Reads and parses a JSON table from `path`.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Adds every record of `other`, overriding records with the same
    /// family and size.
    pub fn extend(&mut self, other: StandardCatalog) {
        self.records.extend(other.records);
    }

    /// Registered size names of `family`, sorted.
    pub fn sizes(&self, family: Family) -> Vec<&str> {
        self.records
            .keys()
            .filter(|(f, _)| *f == family)
            .map(|(_, size)| size.as_str())
            .collect()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no record is registered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Catalog for StandardCatalog {
    fn lookup(&self, family: Family, size: &str) -> CatalogResult<DimensionRecord> {
        self.records
            .get(&(family, size.to_string()))
            .cloned()
            .ok_or_else(|| CatalogError::UnknownSize {
                family,
                size: size.to_string(),
            })
    }
}

#[cfg(test)]
mod tests;
