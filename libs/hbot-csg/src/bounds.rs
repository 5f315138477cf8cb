//! Axis-aligned bounding boxes for placed geometry.

use glam::DVec3;

use crate::transform::Placement;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner of the bounding box.
    pub min: DVec3,
    /// Maximum corner of the bounding box.
    pub max: DVec3,
}

impl BoundingBox {
    /// Creates a new bounding box from min and max points.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Creates an empty (inverted) bounding box.
    pub fn empty() -> Self {
        Self {
            min: DVec3::splat(f64::INFINITY),
            max: DVec3::splat(f64::NEG_INFINITY),
        }
    }

    /// Creates a bounding box that contains all given points.
    pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Self {
        points
            .into_iter()
            .fold(Self::empty(), |bbox, point| bbox.expand_to_include(point))
    }

    /// Returns true if the box encloses no point at all.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Returns the size (full extents) of the bounding box.
    pub fn size(&self) -> DVec3 {
        if self.is_empty() {
            DVec3::ZERO
        } else {
            self.max - self.min
        }
    }

    /// Returns the center of the bounding box.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the eight corner points.
    pub fn corners(&self) -> [DVec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            DVec3::new(a.x, a.y, a.z),
            DVec3::new(b.x, a.y, a.z),
            DVec3::new(a.x, b.y, a.z),
            DVec3::new(b.x, b.y, a.z),
            DVec3::new(a.x, a.y, b.z),
            DVec3::new(b.x, a.y, b.z),
            DVec3::new(a.x, b.y, b.z),
            DVec3::new(b.x, b.y, b.z),
        ]
    }

    /// Returns a bounding box grown to include `point`.
    pub fn expand_to_include(&self, point: DVec3) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &BoundingBox) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Overlap of both boxes; empty when they are disjoint.
    pub fn intersection(&self, other: &BoundingBox) -> Self {
        Self {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }

    /// Returns true if `other` lies entirely within this box.
    pub fn contains(&self, other: &BoundingBox) -> bool {
        if other.is_empty() {
            return true;
        }
        self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && self.min.z <= other.min.z
            && self.max.x >= other.max.x
            && self.max.y >= other.max.y
            && self.max.z >= other.max.z
    }

    /// Returns true if both boxes share a region thicker than `tolerance`
    /// along every axis. Boxes that merely touch do not overlap.
    pub fn overlaps_volume(&self, other: &BoundingBox, tolerance: f64) -> bool {
        let overlap = self.intersection(other);
        !overlap.is_empty()
            && overlap.max.x - overlap.min.x > tolerance
            && overlap.max.y - overlap.min.y > tolerance
            && overlap.max.z - overlap.min.z > tolerance
    }

    /// Box enclosing this box after it has been moved by `placement`.
    pub fn transformed(&self, placement: &Placement) -> Self {
        if self.is_empty() {
            return *self;
        }
        if placement.rotation.is_identity() {
            return Self::new(self.min + placement.location, self.max + placement.location);
        }
        Self::from_points(self.corners().map(|corner| placement.apply(corner)))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit() -> BoundingBox {
        BoundingBox::new(DVec3::ZERO, DVec3::ONE)
    }

    #[test]
    fn test_empty_box() {
        let empty = BoundingBox::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.size(), DVec3::ZERO);
        assert!(unit().contains(&empty));
    }

    #[test]
    fn test_union_contains_both() {
        let other = BoundingBox::new(DVec3::splat(2.0), DVec3::splat(3.0));
        let merged = unit().union(&other);
        assert!(merged.contains(&unit()));
        assert!(merged.contains(&other));
    }

    #[test]
    fn test_touching_boxes_do_not_overlap() {
        let right = BoundingBox::new(DVec3::new(1.0, 0.0, 0.0), DVec3::new(2.0, 1.0, 1.0));
        assert!(!unit().overlaps_volume(&right, 1e-9));
        let shifted = BoundingBox::new(DVec3::splat(0.5), DVec3::splat(1.5));
        assert!(unit().overlaps_volume(&shifted, 1e-9));
    }

    #[test]
    fn test_transformed_by_quarter_turn() {
        let bbox = BoundingBox::new(DVec3::ZERO, DVec3::new(2.0, 1.0, 1.0));
        let moved = bbox.transformed(&Placement::from_rotation(DVec3::Z, 90.0));
        assert_relative_eq!(moved.min.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(moved.max.y, 2.0, epsilon = 1e-12);
    }
}
