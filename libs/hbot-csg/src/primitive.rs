//! # Primitives
//!
//! Leaf solids of the CSG tree.
//!
//! ## Shapes
//!
//! - `Cube` - Rectangular box
//! - `Cylinder` - Round prism along local Z
//! - `Cone` - Frustum along local Z
//! - `NGon` - Regular n-sided prism described by its apothem
//! - `Hole` - Cylinder intended as a subtraction operand
//!
//! Round shapes are centred on the local Z axis and start at `z = 0`;
//! boxes start at the local origin. Either can be centred per axis.

use glam::DVec3;

use crate::bounds::BoundingBox;
use crate::error::{ensure_dimension, CsgError, CsgResult};
use crate::transform::Placement;

// =============================================================================
// SHAPE
// =============================================================================

/// Primitive kind and its size parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Rectangular box with edge lengths `size`.
    Cube {
        /// Edge lengths along X, Y and Z.
        size: DVec3,
    },

    /// Cylinder of `radius` extruded `height` along Z.
    Cylinder {
        /// Radius before tolerance.
        radius: f64,
        /// Length along Z.
        height: f64,
    },

    /// Frustum from `radius1` at `z = 0` to `radius2` at `z = height`.
    Cone {
        /// Bottom radius before tolerance.
        radius1: f64,
        /// Top radius before tolerance.
        radius2: f64,
        /// Length along Z.
        height: f64,
    },

    /// Regular prism with `sides` flats at distance `apothem` from the axis.
    /// One pair of flats is perpendicular to Y for even side counts.
    NGon {
        /// Distance from axis to each flat, before tolerance.
        apothem: f64,
        /// Number of flats.
        sides: u32,
        /// Length along Z.
        height: f64,
    },

    /// Cylinder that marks subtraction intent. Same geometry as `Cylinder`.
    Hole {
        /// Radius before tolerance.
        radius: f64,
        /// Length along Z.
        height: f64,
    },
}

impl Shape {
    /// Rejects negative or non-finite sizes and degenerate prisms.
    pub fn validate(&self) -> CsgResult<()> {
        match self {
            Shape::Cube { size } => {
                ensure_dimension("cube size x", size.x)?;
                ensure_dimension("cube size y", size.y)?;
                ensure_dimension("cube size z", size.z)?;
            }
            Shape::Cylinder { radius, height } | Shape::Hole { radius, height } => {
                ensure_dimension("radius", *radius)?;
                ensure_dimension("height", *height)?;
            }
            Shape::Cone {
                radius1,
                radius2,
                height,
            } => {
                ensure_dimension("radius1", *radius1)?;
                ensure_dimension("radius2", *radius2)?;
                ensure_dimension("height", *height)?;
            }
            Shape::NGon {
                apothem,
                sides,
                height,
            } => {
                if *sides < 3 {
                    return Err(CsgError::TooFewSides(*sides));
                }
                ensure_dimension("apothem", *apothem)?;
                ensure_dimension("height", *height)?;
            }
        }
        Ok(())
    }

    /// Short lowercase name used by the scene format.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Cube { .. } => "cube",
            Shape::Cylinder { .. } => "cylinder",
            Shape::Cone { .. } => "cone",
            Shape::NGon { .. } => "ngon",
            Shape::Hole { .. } => "hole",
        }
    }

    /// Returns true for shapes meant to be subtracted.
    pub fn is_hole(&self) -> bool {
        matches!(self, Shape::Hole { .. })
    }

    /// Full extents along X, Y and Z once `tolerance` is added to radii.
    fn extents(&self, tolerance: f64) -> DVec3 {
        match self {
            Shape::Cube { size } => *size,
            Shape::Cylinder { radius, height } | Shape::Hole { radius, height } => {
                let r = radius + tolerance;
                DVec3::new(2.0 * r, 2.0 * r, *height)
            }
            Shape::Cone {
                radius1,
                radius2,
                height,
            } => {
                let r = radius1.max(*radius2) + tolerance;
                DVec3::new(2.0 * r, 2.0 * r, *height)
            }
            Shape::NGon {
                apothem,
                sides,
                height,
            } => {
                let circumradius =
                    (apothem + tolerance) / (std::f64::consts::PI / f64::from(*sides)).cos();
                DVec3::new(2.0 * circumradius, 2.0 * circumradius, *height)
            }
        }
    }

    fn default_centering(&self) -> [bool; 3] {
        match self {
            Shape::Cube { .. } => [false, false, false],
            _ => [true, true, false],
        }
    }
}

// =============================================================================
// PRIMITIVE
// =============================================================================

/// A placed leaf solid.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    /// Kind and size.
    pub shape: Shape,
    /// Position and orientation in the parent frame.
    pub placement: Placement,
    /// Whether the solid is centred on the local origin along X, Y and Z.
    pub centered: [bool; 3],
    /// Added to every radius when geometry is realized.
    pub tolerance: f64,
}

impl Primitive {
    /// Validates `shape` and places it at the origin.
    pub fn new(shape: Shape) -> CsgResult<Self> {
        shape.validate()?;
        let centered = shape.default_centering();
        Ok(Self {
            shape,
            placement: Placement::IDENTITY,
            centered,
            tolerance: 0.0,
        })
    }

    /// Rectangular box starting at the origin.
    pub fn cube(size: DVec3) -> CsgResult<Self> {
        Self::new(Shape::Cube { size })
    }

    /// Cylinder along Z, centred in X and Y.
    pub fn cylinder(radius: f64, height: f64) -> CsgResult<Self> {
        Self::new(Shape::Cylinder { radius, height })
    }

    /// Frustum along Z, centred in X and Y.
    pub fn cone(radius1: f64, radius2: f64, height: f64) -> CsgResult<Self> {
        Self::new(Shape::Cone {
            radius1,
            radius2,
            height,
        })
    }

    /// Regular prism along Z, centred in X and Y.
    pub fn ngon(apothem: f64, sides: u32, height: f64) -> CsgResult<Self> {
        Self::new(Shape::NGon {
            apothem,
            sides,
            height,
        })
    }

    /// Subtraction cylinder along Z, centred in X and Y.
    pub fn hole(radius: f64, height: f64) -> CsgResult<Self> {
        Self::new(Shape::Hole { radius, height })
    }

    /// Sets the radial tolerance. The toleranced radius must stay non-negative.
    pub fn with_tolerance(mut self, tolerance: f64) -> CsgResult<Self> {
        if !tolerance.is_finite() {
            return Err(CsgError::InvalidDimension {
                what: "tolerance",
                value: tolerance,
            });
        }
        let smallest_radius = match &self.shape {
            Shape::Cube { .. } => None,
            Shape::Cylinder { radius, .. } | Shape::Hole { radius, .. } => Some(*radius),
            Shape::Cone {
                radius1, radius2, ..
            } => Some(radius1.min(*radius2)),
            Shape::NGon { apothem, .. } => Some(*apothem),
        };
        if let Some(radius) = smallest_radius {
            ensure_dimension("toleranced radius", radius + tolerance)?;
        }
        self.tolerance = tolerance;
        Ok(self)
    }

    /// Overrides per-axis centring.
    pub fn centered(mut self, centered: [bool; 3]) -> Self {
        self.centered = centered;
        self
    }

    /// Extents in the primitive's own frame, before placement.
    pub fn local_bounding_box(&self) -> BoundingBox {
        let extents = self.shape.extents(self.tolerance);
        let mut min = DVec3::ZERO;
        let mut max = DVec3::ZERO;
        for axis in 0..3 {
            if self.centered[axis] {
                min[axis] = -extents[axis] / 2.0;
                max[axis] = extents[axis] / 2.0;
            } else {
                max[axis] = extents[axis];
            }
        }
        BoundingBox::new(min, max)
    }

    /// Extents in the parent frame.
    pub fn bounding_box(&self) -> BoundingBox {
        self.local_bounding_box().transformed(&self.placement)
    }
}

// =============================================================================
// TESTS
// =============================================================================
