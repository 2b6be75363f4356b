use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Opaque entity key owned by the simulation's entity store. The grid only indexes copies.
pub type EntityId = u64;

/// Circle used for bodies, vision and attack reach.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    /// Expected ≥ 0.
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Axis-aligned bounds of the circle.
    pub fn bounds(&self) -> Rectangle {
        let r = Vec2::splat(self.radius);
        Rectangle::new(self.center - r, self.center + r)
    }

    /// Inclusive point test.
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.distance(self.center) <= self.radius
    }
}

/// Axis-aligned rectangle given by its corners.
///
/// `min <= max` per axis is expected but never enforced; see [`Rectangle::intersect`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rectangle {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle centered at `center` with full `width` and `height`.
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        let half = Vec2::new(width / 2.0, height / 2.0);
        Self { min: center - half, max: center + half }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Overlap of two rectangles.
    ///
    /// Disjoint inputs still produce a value, with `min > max` on at least one axis.
    /// Test disjointness first (e.g. with `Narrowphase::rect_rect`) or use
    /// [`Rectangle::intersection`].
    pub fn intersect(&self, other: &Rectangle) -> Rectangle {
        Rectangle { min: self.min.max(other.min), max: self.max.min(other.max) }
    }

    /// Overlap of two rectangles, `None` when they are disjoint. Touching edges yield a
    /// degenerate (zero-width or zero-height) rectangle.
    pub fn intersection(&self, other: &Rectangle) -> Option<Rectangle> {
        let r = self.intersect(other);
        (r.min.x <= r.max.x && r.min.y <= r.max.y).then_some(r)
    }

    /// True iff `other` lies entirely within `self` (inclusive).
    pub fn contains(&self, other: &Rectangle) -> bool {
        self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && self.max.x >= other.max.x
            && self.max.y >= other.max.y
    }

    /// Inclusive point test.
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Result of a detailed overlap test.
///
/// `penetration`, `normal` and `contact_point` only carry meaning when `colliding` is true.
/// The default value is the "separated" result.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CollisionDetails {
    pub colliding: bool,
    /// Overlap depth along `normal` (≥ 0).
    pub penetration: f32,
    /// Unit separation direction.
    pub normal: Vec2,
    pub contact_point: Vec2,
}

impl CollisionDetails {
    pub const SEPARATED: CollisionDetails = CollisionDetails {
        colliding: false,
        penetration: 0.0,
        normal: Vec2::ZERO,
        contact_point: Vec2::ZERO,
    };
}

/// Grid-owned copy of an entity's geometric state.
///
/// Goes stale as soon as the entity moves in the simulation, until the caller pushes an update.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpatialEntry {
    pub id: EntityId,
    pub position: Vec2,
    pub radius: f32,
}

/// Occupancy statistics for a grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GridStats {
    pub entities: usize,
    pub cells: usize,
    /// Cells holding at least one entry.
    pub active_cells: usize,
    /// Size of the most crowded bucket.
    pub max_bucket_len: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rectangle_from_center_and_metrics() {
        let r = Rectangle::from_center(Vec2::new(5.0, 5.0), 4.0, 2.0);
        assert_eq!(r.min, Vec2::new(3.0, 4.0));
        assert_eq!(r.max, Vec2::new(7.0, 6.0));
        assert_eq!(r.center(), Vec2::new(5.0, 5.0));
        assert_relative_eq!(r.width(), 4.0);
        assert_relative_eq!(r.height(), 2.0);
        assert_relative_eq!(r.area(), 8.0);
    }

    #[test]
    fn test_intersect_overlapping() {
        let a = Rectangle::new(Vec2::ZERO, Vec2::new(4.0, 4.0));
        let b = Rectangle::new(Vec2::new(2.0, 1.0), Vec2::new(6.0, 3.0));
        let i = a.intersect(&b);
        assert_eq!(i, Rectangle::new(Vec2::new(2.0, 1.0), Vec2::new(4.0, 3.0)));
        assert_eq!(a.intersection(&b), Some(i));
    }

    #[test]
    fn test_intersect_disjoint_is_inverted() {
        let a = Rectangle::new(Vec2::ZERO, Vec2::new(1.0, 1.0));
        let b = Rectangle::new(Vec2::new(3.0, 0.0), Vec2::new(4.0, 1.0));
        let i = a.intersect(&b);
        assert!(i.min.x > i.max.x);
        assert!(i.width() < 0.0);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn test_intersection_touching_is_degenerate() {
        let a = Rectangle::new(Vec2::ZERO, Vec2::new(1.0, 1.0));
        let b = Rectangle::new(Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0));
        let i = a.intersection(&b).unwrap();
        assert_relative_eq!(i.width(), 0.0);
    }

    #[test]
    fn test_contains_inclusive() {
        let outer = Rectangle::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert!(outer.contains(&outer));
        assert!(outer.contains(&Rectangle::new(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0))));
        assert!(!outer.contains(&Rectangle::new(Vec2::new(9.0, 9.0), Vec2::new(11.0, 10.0))));
    }

    #[test]
    fn test_circle_bounds_and_points() {
        let c = Circle::new(Vec2::new(1.0, 2.0), 0.5);
        let b = c.bounds();
        assert_eq!(b.min, Vec2::new(0.5, 1.5));
        assert_eq!(b.max, Vec2::new(1.5, 2.5));
        assert!(c.contains_point(Vec2::new(1.5, 2.0)));
        assert!(!c.contains_point(Vec2::new(1.51, 2.0)));
        assert!(b.contains_point(Vec2::new(0.5, 2.5)));
    }

    #[test]
    fn test_separated_is_default() {
        assert_eq!(CollisionDetails::default(), CollisionDetails::SEPARATED);
    }
}
