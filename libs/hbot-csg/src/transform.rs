//! # Transforms
//!
//! Rigid placements applied to primitives and whole sub-trees.
//!
//! A [`Placement`] rotates about the local origin first and translates
//! second, the same order the downstream compiler uses for
//! `translate(location) rotate(a = angle, v = axis) child`.

use glam::{DQuat, DVec3};

// =============================================================================
// ROTATION
// =============================================================================

/// Axis/angle rotation, angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// Rotation axis. Need not be normalized.
    pub axis: DVec3,
    /// Rotation angle in degrees, right-handed about `axis`.
    pub angle: f64,
}

impl Rotation {
    /// No rotation.
    pub const IDENTITY: Self = Self {
        axis: DVec3::Z,
        angle: 0.0,
    };

    /// Creates a rotation of `angle` degrees about `axis`.
    pub fn new(axis: DVec3, angle: f64) -> Self {
        Self { axis, angle }
    }

    /// Returns true if applying this rotation leaves every point in place.
    pub fn is_identity(&self) -> bool {
        self.angle.rem_euclid(360.0) == 0.0 || self.axis.length_squared() == 0.0
    }

    /// Unit quaternion equivalent.
    pub fn to_quat(&self) -> DQuat {
        if self.is_identity() {
            DQuat::IDENTITY
        } else {
            DQuat::from_axis_angle(self.axis.normalize(), self.angle.to_radians())
        }
    }

    /// Rotates a point about the origin.
    pub fn apply(&self, point: DVec3) -> DVec3 {
        if self.is_identity() {
            point
        } else {
            self.to_quat() * point
        }
    }

    /// Rotation equivalent to applying `self` and then `outer`.
    ///
    /// Identity and same-axis cases stay exact so the exported angles of
    /// simple parts do not pick up rounding noise.
    pub fn then(&self, outer: &Rotation) -> Rotation {
        if self.is_identity() {
            return *outer;
        }
        if outer.is_identity() {
            return *self;
        }
        if self.axis == outer.axis {
            return Rotation::new(self.axis, self.angle + outer.angle);
        }
        let (axis, angle) = (outer.to_quat() * self.to_quat()).to_axis_angle();
        Rotation::new(axis, angle.to_degrees())
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// =============================================================================
// PLACEMENT
// =============================================================================

/// Rigid placement: rotation about the local origin, then translation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    /// Translation applied after the rotation.
    pub location: DVec3,
    /// Rotation about the local origin.
    pub rotation: Rotation,
}

impl Placement {
    /// No movement at all.
    pub const IDENTITY: Self = Self {
        location: DVec3::ZERO,
        rotation: Rotation::IDENTITY,
    };

    /// Pure translation.
    pub fn from_location(location: DVec3) -> Self {
        Self {
            location,
            rotation: Rotation::IDENTITY,
        }
    }

    /// Pure rotation about the origin.
    pub fn from_rotation(axis: DVec3, angle: f64) -> Self {
        Self {
            location: DVec3::ZERO,
            rotation: Rotation::new(axis, angle),
        }
    }

    /// Returns true if this placement moves nothing.
    pub fn is_identity(&self) -> bool {
        self.location == DVec3::ZERO && self.rotation.is_identity()
    }

    /// Maps a point from the local frame into the parent frame.
    pub fn apply(&self, point: DVec3) -> DVec3 {
        self.rotation.apply(point) + self.location
    }

    /// Placement equivalent to applying `self` and then `outer`.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use hbot_csg::Placement;
    ///
    /// let inner = Placement::from_location(DVec3::new(1.0, 0.0, 0.0));
    /// let outer = Placement::from_rotation(DVec3::Z, 180.0);
    /// let p = inner.then(&outer).apply(DVec3::ZERO);
    /// assert!((p - DVec3::new(-1.0, 0.0, 0.0)).length() < 1e-12);
    /// ```
    pub fn then(&self, outer: &Placement) -> Placement {
        Placement {
            location: outer.rotation.apply(self.location) + outer.location,
            rotation: self.rotation.then(&outer.rotation),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
