//! # Dimension Records
//!
//! Typed, read-only dimension bundles, all lengths in millimetres.
//!
//! A [`DimensionRecord`] wraps exactly one of them and remembers which
//! family it belongs to. Typed accessors on [`crate::Catalog`] unwrap it
//! through the `TryFrom` impls at the bottom of this file.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::family::Family;

/// Radial ball bearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bearing {
    pub inner_diameter: f64,
    pub outer_diameter: f64,
    pub width: f64,
}

/// Linear ball bearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearBearing {
    /// Rod diameter the bearing rides on.
    pub inner_diameter: f64,
    pub outer_diameter: f64,
    pub length: f64,
}

/// Cap screw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screw {
    /// Thread major diameter.
    pub outer_diameter: f64,
    pub head_diameter: f64,
    pub head_height: f64,
}

/// Hex nut or lock nut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nut {
    /// Across flats.
    pub width: f64,
    pub height: f64,
    /// Thread major diameter.
    pub diameter: f64,
}

/// Stepper motor with a square face plate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stepper {
    /// Face plate edge length.
    pub width: f64,
    /// Body length behind the face plate.
    pub length: f64,
    pub shaft_diameter: f64,
    pub shaft_length: f64,
    /// Centring boss around the shaft.
    pub boss_diameter: f64,
    pub boss_height: f64,
    /// Centre distance between adjacent mounting holes.
    pub hole_spacing: f64,
    /// Screw size name of the mounting holes.
    pub screw_size: String,
}

/// Timing belt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Belt {
    pub pitch: f64,
    pub width: f64,
    /// Overall thickness including teeth.
    pub thickness: f64,
    pub tooth_height: f64,
}

/// A record of any family.
#[derive(Debug, Clone, PartialEq)]
pub enum DimensionRecord {
    Bearing(Bearing),
    LinearBearing(LinearBearing),
    Screw(Screw),
    Nut(Nut),
    LockNut(Nut),
    Motor(Stepper),
    Belt(Belt),
}

impl DimensionRecord {
    /// Family this record belongs to.
    pub fn family(&self) -> Family {
        match self {
            DimensionRecord::Bearing(_) => Family::Bearing,
            DimensionRecord::LinearBearing(_) => Family::LinearBearing,
            DimensionRecord::Screw(_) => Family::Screw,
            DimensionRecord::Nut(_) => Family::Nut,
            DimensionRecord::LockNut(_) => Family::LockNut,
            DimensionRecord::Motor(_) => Family::Motor,
            DimensionRecord::Belt(_) => Family::Belt,
        }
    }

    /// Named numeric fields of the record.
    pub fn fields(&self) -> Vec<(&'static str, f64)> {
        match self {
            DimensionRecord::Bearing(b) => vec![
                ("inner_diameter", b.inner_diameter),
                ("outer_diameter", b.outer_diameter),
                ("width", b.width),
            ],
            DimensionRecord::LinearBearing(b) => vec![
                ("inner_diameter", b.inner_diameter),
                ("outer_diameter", b.outer_diameter),
                ("length", b.length),
            ],
            DimensionRecord::Screw(s) => vec![
                ("outer_diameter", s.outer_diameter),
                ("head_diameter", s.head_diameter),
                ("head_height", s.head_height),
            ],
            DimensionRecord::Nut(n) | DimensionRecord::LockNut(n) => vec![
                ("width", n.width),
                ("height", n.height),
                ("diameter", n.diameter),
            ],
            DimensionRecord::Motor(m) => vec![
                ("width", m.width),
                ("length", m.length),
                ("shaft_diameter", m.shaft_diameter),
                ("shaft_length", m.shaft_length),
                ("boss_diameter", m.boss_diameter),
                ("boss_height", m.boss_height),
                ("hole_spacing", m.hole_spacing),
            ],
            DimensionRecord::Belt(b) => vec![
                ("pitch", b.pitch),
                ("width", b.width),
                ("thickness", b.thickness),
                ("tooth_height", b.tooth_height),
            ],
        }
    }

    /// Rejects records with a negative or non-finite field.
    pub fn validate(&self, size: &str) -> Result<(), CatalogError> {
        match self.fields().into_iter().find(|(_, v)| !(v.is_finite() && *v >= 0.0)) {
            Some((field, value)) => Err(CatalogError::InvalidRecord {
                family: self.family(),
                size: size.to_string(),
                field,
                value,
            }),
            None => Ok(()),
        }
    }
}

macro_rules! impl_try_from_record {
    ($record:ty, $family:expr, $($variant:ident)|+) => {
        impl TryFrom<DimensionRecord> for $record {
            type Error = CatalogError;

            fn try_from(record: DimensionRecord) -> Result<Self, Self::Error> {
                match record {
                    $(DimensionRecord::$variant(inner) => Ok(inner),)+
                    other => Err(CatalogError::FamilyMismatch {
                        expected: $family,
                        found: other.family(),
                    }),
                }
            }
        }
    };
}

impl_try_from_record!(Bearing, Family::Bearing, Bearing);
impl_try_from_record!(LinearBearing, Family::LinearBearing, LinearBearing);
impl_try_from_record!(Screw, Family::Screw, Screw);
impl_try_from_record!(Nut, Family::Nut, Nut | LockNut);
impl_try_from_record!(Stepper, Family::Motor, Motor);
impl_try_from_record!(Belt, Family::Belt, Belt);
