//! # Config Crate
//!
//! Centralized configuration constants for the hbot part generator.
//! Clearance margins, numeric tolerances and driver defaults live here so
//! the geometry, catalog and part crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, RENDER_OFFSET};
//!
//! // Cutting operands are pushed past the faces they cut through.
//! let plate = 4.8;
//! let hole_height = plate + 2.0 * RENDER_OFFSET;
//! assert!(hole_height > plate);
//! assert!(EPSILON_TOLERANCE < RENDER_OFFSET);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Millimetres**: Every length is expressed in millimetres
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
