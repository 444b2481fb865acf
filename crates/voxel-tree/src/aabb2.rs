//! Axis-aligned bounding boxes in 2D (normalized device coordinates).

use nalgebra::Point2;

/// An axis-aligned bounding box in 2D space.
///
/// Shares the semantics of [`Aabb3`](crate::Aabb3): empty boxes carry
/// inverted infinite extents, [`add_point`](Aabb2::add_point) grows
/// monotonically and [`contains`](Aabb2::contains) is strict on both axes.
///
/// Used for projected screen-space geometry, so coordinates are typically in
/// the `[-1, 1]` NDC range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    min: Point2<f32>,
    max: Point2<f32>,
}

impl Aabb2 {
    /// Creates an empty bounding box (inverted infinite extents).
    pub fn empty() -> Self {
        Self {
            min: Point2::new(f32::INFINITY, f32::INFINITY),
            max: Point2::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Creates a bounding box from explicit corners.
    pub fn new(min: Point2<f32>, max: Point2<f32>) -> Self {
        Self { min, max }
    }

    /// Returns the minimum corner.
    #[inline]
    pub fn min(&self) -> Point2<f32> {
        self.min
    }

    /// Returns the maximum corner.
    #[inline]
    pub fn max(&self) -> Point2<f32> {
        self.max
    }

    /// Returns the horizontal extent.
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Returns the vertical extent.
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Returns the midpoint of the box.
    #[inline]
    pub fn center(&self) -> Point2<f32> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Grows the box to cover `(x, y)`.
    pub fn add_point(&mut self, x: f32, y: f32) {
        self.min.x = self.min.x.min(x);
        self.min.y = self.min.y.min(y);
        self.max.x = self.max.x.max(x);
        self.max.y = self.max.y.max(y);
    }

    /// Returns `true` if `point` lies strictly inside the box.
    #[inline]
    pub fn contains(&self, point: Point2<f32>) -> bool {
        self.min.x < point.x && self.min.y < point.y && self.max.x > point.x && self.max.y > point.y
    }

    /// Approximate overlap test: `true` if either corner of `other` lies
    /// strictly inside `self`.
    ///
    /// This is deliberately permissive and *not* commutative: a box fully
    /// enclosing `self` is reported as non-intersecting, and boundary-touching
    /// boxes never intersect. The quadtree occupancy test depends on these
    /// exact semantics, so they are preserved rather than replaced with an
    /// interval-overlap test.
    #[inline]
    pub fn intersects(&self, other: &Aabb2) -> bool {
        self.contains(other.min) || self.contains(other.max)
    }
}

impl Default for Aabb2 {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_box_contains_nothing() {
        let bounds = Aabb2::empty();
        assert!(!bounds.contains(Point2::origin()));
    }

    #[test]
    fn add_point_grows() {
        let mut bounds = Aabb2::empty();
        bounds.add_point(0.25, -0.5);
        bounds.add_point(-0.75, 0.5);

        assert_eq!(bounds.min(), Point2::new(-0.75, -0.5));
        assert_eq!(bounds.max(), Point2::new(0.25, 0.5));
        assert_eq!(bounds.width(), 1.0);
        assert_eq!(bounds.height(), 1.0);
    }

    #[test]
    fn contains_is_strict() {
        let bounds = Aabb2::new(Point2::new(-1.0, -1.0), Point2::new(1.0, 1.0));
        assert!(bounds.contains(Point2::origin()));
        assert!(!bounds.contains(Point2::new(1.0, 0.0)));
        assert!(!bounds.contains(Point2::new(-1.0, -1.0)));
    }

    #[test]
    fn intersects_by_contained_corner() {
        let quadrant = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));

        let overlapping = Aabb2::new(Point2::new(0.5, 0.5), Point2::new(2.0, 2.0));
        assert!(quadrant.intersects(&overlapping));

        let outside = Aabb2::new(Point2::new(2.0, 2.0), Point2::new(3.0, 3.0));
        assert!(!quadrant.intersects(&outside));
    }

    #[test]
    fn intersects_is_not_commutative() {
        let small = Aabb2::new(Point2::new(0.25, 0.25), Point2::new(0.75, 0.75));
        let large = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));

        // Both of small's corners are inside large, but neither of large's
        // corners is inside small.
        assert!(large.intersects(&small));
        assert!(!small.intersects(&large));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let left = Aabb2::new(Point2::new(-1.0, -1.0), Point2::new(0.0, 1.0));
        let right = Aabb2::new(Point2::new(0.0, -1.0), Point2::new(1.0, 1.0));
        assert!(!left.intersects(&right));
        assert!(!right.intersects(&left));
    }
}
