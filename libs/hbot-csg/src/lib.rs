//! # hbot CSG
//!
//! Constructive solid geometry model for the printable parts of an H-bot
//! motion carriage.
//!
//! ## Architecture
//!
//! ```text
//! Primitive ─┐
//!            ├─ Node (placed, owned) ─ union / hull / intersection / subtract ─ Node
//! Composite ─┘                                                              │
//!                                                         export::to_scene ─┘ → JSON
//! ```
//!
//! Nodes are plain owned values. Combinators consume their operands, so a
//! sub-tree placed twice has to be cloned first and the two placements can
//! never alias.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use hbot_csg::{Node, Primitive};
//!
//! let plate: Node = Primitive::cube(DVec3::new(20.0, 10.0, 3.0)).unwrap().into();
//! let hole: Node = Primitive::hole(1.5, 3.2).unwrap().into();
//! let part = plate.subtract(hole.translated(DVec3::new(10.0, 5.0, -0.1)));
//! assert_eq!(part.primitive_count(), 2);
//! ```

pub mod bounds;
pub mod error;
pub mod export;
pub mod node;
pub mod primitive;
pub mod shapes;
pub mod transform;

// Re-export public API
pub use bounds::BoundingBox;
pub use error::{CsgError, CsgResult};
pub use export::{from_json, to_json, to_scene, write_scene, SceneNode};
pub use node::{Composite, Node, Operator};
pub use primitive::{Primitive, Shape};
pub use transform::{Placement, Rotation};
