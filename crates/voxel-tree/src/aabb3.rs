//! Axis-aligned bounding boxes in 3D space.

use nalgebra::Point3;

/// An axis-aligned bounding box in 3D space.
///
/// A freshly-created box is *empty*: its minimum corner sits at `+INF` and
/// its maximum corner at `-INF` on every axis. An empty box contains nothing
/// and growing it with the first [`add_point`](Aabb3::add_point) call snaps
/// it to that point. Once at least one point has been added,
/// `min[i] <= max[i]` holds for all axes.
///
/// # Boundary semantics
///
/// [`contains`](Aabb3::contains) uses **strict** inequality on every axis:
/// a point lying exactly on a face, edge or corner of the box is *not*
/// contained. The partitioning trees rely on this so that a point can never
/// be assigned to two sibling regions; the price is that a point exactly on
/// a split plane belongs to neither side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb3 {
    min: Point3<f32>,
    max: Point3<f32>,
}

impl Aabb3 {
    /// Creates an empty bounding box (inverted infinite extents).
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Point3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Creates a bounding box from explicit corners.
    ///
    /// The corners are taken as-is; callers are expected to pass
    /// `min[i] <= max[i]`.
    pub fn new(min: Point3<f32>, max: Point3<f32>) -> Self {
        Self { min, max }
    }

    /// Creates the bounding box of a point set.
    ///
    /// Returns an empty box for an empty set.
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point3<f32>>,
    {
        let mut bounds = Self::empty();
        for point in points {
            bounds.add_point(*point);
        }
        bounds
    }

    /// Returns the minimum corner.
    #[inline]
    pub fn min(&self) -> Point3<f32> {
        self.min
    }

    /// Returns the maximum corner.
    #[inline]
    pub fn max(&self) -> Point3<f32> {
        self.max
    }

    /// Returns `true` if no point has ever been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    /// Grows the box to cover `point`.
    ///
    /// Growth is monotonic: the box after a call contains the box before it.
    pub fn add_point(&mut self, point: Point3<f32>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);

        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Returns `true` if `point` lies strictly inside the box.
    ///
    /// Boundary-exact points are excluded on every axis.
    #[inline]
    pub fn contains(&self, point: Point3<f32>) -> bool {
        self.min.x < point.x
            && self.min.y < point.y
            && self.min.z < point.z
            && self.max.x > point.x
            && self.max.y > point.y
            && self.max.z > point.z
    }

    /// Returns the midpoint of the box.
    #[inline]
    pub fn center(&self) -> Point3<f32> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns the extent of the box along each axis, as `[x, y, z]`.
    #[inline]
    pub fn widths(&self) -> [f32; 3] {
        [
            self.max.x - self.min.x,
            self.max.y - self.min.y,
            self.max.z - self.min.z,
        ]
    }

    /// Returns a copy of the box translated by `offset`.
    pub fn translated(&self, offset: nalgebra::Vector3<f32>) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

impl Default for Aabb3 {
    fn default() -> Self {
        Self::empty()
    }
}
