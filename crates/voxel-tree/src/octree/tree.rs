//! Octree container and construction.

use log::trace;
use nalgebra::Point3;

use crate::Aabb3;

use super::node::OctreeNode;

/// Which half of each axis an octant occupies, indexed by octant.
///
/// The ordering is fixed so that node paths stay meaningful across builds:
/// octant 0 is the +Z half of the low-XY quadrant, octant 3 the fully-low
/// octant, octant 5 the fully-high octant. Each entry is `(x_high, y_high,
/// z_high)`. Together the 8 octants tile the parent box exactly.
const OCTANT_HIGH: [(bool, bool, bool); 8] = [
    (false, false, true),
    (true, false, true),
    (true, false, false),
    (false, false, false),
    (false, true, true),
    (true, true, true),
    (true, true, false),
    (false, true, false),
];

/// Octant index by `x_high | y_high << 1 | z_high << 2` key; the inverse of
/// [`OCTANT_HIGH`].
const OCTANT_BY_KEY: [usize; 8] = [3, 2, 7, 6, 0, 1, 4, 5];

/// Returns the bounding box of octant `index` within `bounds`.
///
/// # Panics
/// Panics if `index >= 8`.
pub fn octant_bounds(bounds: &Aabb3, index: usize) -> Aabb3 {
    let min = bounds.min();
    let max = bounds.max();
    let mid = bounds.center();
    let (x_high, y_high, z_high) = OCTANT_HIGH[index];

    let pick = |high: bool, lo: f32, m: f32, hi: f32| if high { (m, hi) } else { (lo, m) };
    let (min_x, max_x) = pick(x_high, min.x, mid.x, max.x);
    let (min_y, max_y) = pick(y_high, min.y, mid.y, max.y);
    let (min_z, max_z) = pick(z_high, min.z, mid.z, max.z);

    Aabb3::new(
        Point3::new(min_x, min_y, min_z),
        Point3::new(max_x, max_y, max_z),
    )
}

/// Returns the octant a point belongs to, splitting `bounds` at `mid`.
///
/// Half-open ownership: a coordinate equal to the midpoint goes to the high
/// half. Every point inside the (closed) parent box is assigned to exactly
/// one octant, so points on a split plane are routed rather than dropped.
fn octant_index(mid: Point3<f32>, point: Point3<f32>) -> usize {
    let key = (point.x >= mid.x) as usize
        | ((point.y >= mid.y) as usize) << 1
        | ((point.z >= mid.z) as usize) << 2;
    OCTANT_BY_KEY[key]
}

/// A sparse octree over a 3D vertex cloud.
///
/// Built top-down in a single call; nodes are never mutated afterwards and
/// each node exclusively owns its children. During construction the tree
/// refers to the caller's vertices by index and never copies them.
///
/// # Degenerate inputs
///
/// Zero points produce a root with an empty bounding box and no children;
/// `max_depth == 0` produces only the root, treated as a leaf. Neither is an
/// error; callers that need voxels should check
/// [`collect_leaf_geometry`](Octree::collect_leaf_geometry) for emptiness.
///
/// # Boundary ownership
///
/// A point exactly on a split plane belongs to the *high* octant of that
/// axis (half-open intervals, closed at the cloud's outer faces). Every
/// input point therefore lands in exactly one leaf; note that this differs
/// from the strict [`Aabb3::contains`] test, under which a point on a leaf's
/// face is not strictly inside it.
#[derive(Debug, Clone)]
pub struct Octree {
    root: OctreeNode,
}

impl Octree {
    /// Builds an octree over `points`, subdividing `max_depth` levels.
    pub fn build(points: &[Point3<f32>], max_depth: u32) -> Self {
        let bounds = Aabb3::from_points(points.iter());
        let mut root = OctreeNode::new(Vec::new(), bounds);

        if max_depth == 0 || points.is_empty() {
            root.mark_leaf();
        } else {
            let ids: Vec<u32> = (0..points.len() as u32).collect();
            build_suboctree(&mut root, points, ids, max_depth);
        }

        Self { root }
    }

    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &OctreeNode {
        &self.root
    }

    /// Returns `true` if the tree holds no occupied octants.
    pub fn is_empty(&self) -> bool {
        self.root.child_count() == 0 && self.root.bounds().is_empty()
    }

    /// Collects one box per occupied voxel, merging fully occupied regions.
    ///
    /// A complete subtree contributes its own (coarser) box instead of the
    /// boxes of its 8 descendants, trading voxel count for resolution only
    /// where the volume is fully occupied. All other leaves contribute their
    /// own box.
    pub fn collect_leaf_geometry(&self) -> Vec<Aabb3> {
        let mut boxes = Vec::new();
        collect_boxes(&self.root, &mut boxes);
        boxes
    }
}

/// Recursively subdivides `parent` into occupied octants.
///
/// `ids` indexes into `points` and holds exactly the vertices inside the
/// parent's bounds (all vertices, for the root).
fn build_suboctree(parent: &mut OctreeNode, points: &[Point3<f32>], ids: Vec<u32>, depth: u32) {
    let bounds = *parent.bounds();
    let mid = bounds.center();

    let mut buckets: [Vec<u32>; 8] = Default::default();
    for id in ids {
        buckets[octant_index(mid, points[id as usize])].push(id);
    }

    for (index, subset) in buckets.into_iter().enumerate() {
        if subset.is_empty() {
            continue;
        }

        let mut path = parent.path().to_vec();
        path.push(index as u8);
        let mut child = OctreeNode::new(path, octant_bounds(&bounds, index));

        if depth - 1 > 0 {
            build_suboctree(&mut child, points, subset, depth - 1);
        } else {
            child.mark_leaf();
        }

        parent.set_child(index, child);
    }

    let full = (0..8).all(|i| {
        parent
            .child(i)
            .is_some_and(|c| c.is_leaf() || c.is_complete_subtree())
    });
    if full {
        parent.mark_complete();
        trace!(
            "complete subtree at depth {} covering {:?}..{:?}",
            parent.path().len(),
            parent.bounds().min(),
            parent.bounds().max(),
        );
    }
}

fn collect_boxes(node: &OctreeNode, out: &mut Vec<Aabb3>) {
    if node.is_complete_subtree() {
        out.push(*node.bounds());
        return;
    }

    // Only the root can reach here as a leaf; its box is the whole cloud.
    if node.is_leaf() {
        if !node.bounds().is_empty() {
            out.push(*node.bounds());
        }
        return;
    }

    for child in node.children().flatten() {
        if child.is_leaf() {
            out.push(*child.bounds());
        } else {
            collect_boxes(child, out);
        }
    }
}
