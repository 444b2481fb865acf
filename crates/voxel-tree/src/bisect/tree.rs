//! Bisection tree container and construction.

use log::trace;
use nalgebra::Point3;

use crate::{Aabb3, DegenerateGeometryError};

use super::node::BisectionNode;

/// A binary space partition built by recursive widest-axis bisection.
///
/// Nodes refer to the caller's vertices by index; the tree never copies the
/// point set. Each terminal side of the recursion contributes the bounding
/// box of its own final points to [`leaf_bounds`](BisectionTree::leaf_bounds).
///
/// # Input mutation
///
/// [`build`](BisectionTree::build) translates the points so the cloud's
/// bounding-box midpoint sits at the origin (this keeps the axis-midpoint
/// arithmetic well-conditioned for clouds far from the origin) and translates
/// them back before returning. The round trip can perturb coordinates by a
/// float rounding step; callers needing bit-exact vertices should pass a
/// copy.
#[derive(Debug, Clone)]
pub struct BisectionTree {
    root: BisectionNode,
    leaf_bounds: Vec<Aabb3>,
}

impl BisectionTree {
    /// Builds a bisection tree over `points`.
    ///
    /// Recursion continues into a side while it holds more than
    /// `min_leaf_size` points and depth remains; each terminal side appends
    /// its bounding box to the leaf list.
    ///
    /// Zero points yield a root-only tree with no leaf boxes; `max_depth ==
    /// 0` yields the whole cloud as the single leaf.
    ///
    /// # Errors
    ///
    /// [`DegenerateGeometryError`] if some subset cannot be split along any
    /// of the three axes (all points coincident), which would otherwise
    /// recurse forever at the leaf threshold.
    pub fn build(
        points: &mut [Point3<f32>],
        max_depth: u32,
        min_leaf_size: usize,
    ) -> Result<Self, DegenerateGeometryError> {
        let mut root = BisectionNode::new((0..points.len() as u32).collect());

        if points.is_empty() {
            return Ok(Self {
                root,
                leaf_bounds: Vec::new(),
            });
        }

        let bounds = Aabb3::from_points(points.iter());
        if max_depth == 0 {
            return Ok(Self {
                root,
                leaf_bounds: vec![bounds],
            });
        }

        // Re-center the cloud for the duration of the build.
        let offset = bounds.center().coords;
        for point in points.iter_mut() {
            *point -= offset;
        }

        let mut leaf_bounds = Vec::new();
        let outcome = build_subtree(&mut root, points, max_depth, min_leaf_size, &mut leaf_bounds);

        for point in points.iter_mut() {
            *point += offset;
        }
        outcome?;

        let leaf_bounds = leaf_bounds
            .into_iter()
            .map(|bounds| bounds.translated(offset))
            .collect();

        Ok(Self { root, leaf_bounds })
    }

    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &BisectionNode {
        &self.root
    }

    /// Returns one bounding box per terminal node, in creation order.
    #[inline]
    pub fn leaf_bounds(&self) -> &[Aabb3] {
        &self.leaf_bounds
    }
}

/// Splits `node`'s vertex subset and recurses into both sides.
///
/// The bounding box is rebuilt from the live subset at every level rather
/// than narrowed from the parent's box, so the split adapts to where the
/// points actually are.
fn build_subtree(
    node: &mut BisectionNode,
    points: &[Point3<f32>],
    depth: u32,
    min_leaf_size: usize,
    leaf_bounds: &mut Vec<Aabb3>,
) -> Result<(), DegenerateGeometryError> {
    let bounds = Aabb3::from_points(node.point_ids().iter().map(|&id| &points[id as usize]));
    let widths = bounds.widths();
    let mid = bounds.center();

    // Try axes in strictly decreasing width order.
    let mut axes = [0usize, 1, 2];
    axes.sort_by(|&a, &b| widths[b].total_cmp(&widths[a]));

    for axis in axes {
        let split = mid[axis];
        let mut left = Vec::new();
        let mut right = Vec::new();

        for &id in node.point_ids() {
            if points[id as usize][axis] > split {
                left.push(id);
            } else {
                right.push(id);
            }
        }

        trace!("depth {depth}: axis {axis} mid {split}");

        if left.is_empty() || right.is_empty() {
            continue;
        }

        let left_bounds = Aabb3::from_points(left.iter().map(|&id| &points[id as usize]));
        let right_bounds = Aabb3::from_points(right.iter().map(|&id| &points[id as usize]));

        let mut left_node = BisectionNode::new(left);
        let mut right_node = BisectionNode::new(right);

        if left_node.point_ids().len() > min_leaf_size && depth - 1 > 0 {
            build_subtree(&mut left_node, points, depth - 1, min_leaf_size, leaf_bounds)?;
        } else {
            leaf_bounds.push(left_bounds);
        }

        if right_node.point_ids().len() > min_leaf_size && depth - 1 > 0 {
            build_subtree(&mut right_node, points, depth - 1, min_leaf_size, leaf_bounds)?;
        } else {
            leaf_bounds.push(right_bounds);
        }

        node.set_children(left_node, right_node);
        return Ok(());
    }

    Err(DegenerateGeometryError {
        point_count: node.point_ids().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_points(count: usize, seed: u64) -> Vec<Point3<f32>> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| Point3::new(rng.r#gen::<f32>(), rng.r#gen(), rng.r#gen()))
            .collect()
    }

    fn covered_by(bounds: &Aabb3, p: Point3<f32>) -> bool {
        let (min, max) = (bounds.min(), bounds.max());
        min.x <= p.x && min.y <= p.y && min.z <= p.z && max.x >= p.x && max.y >= p.y && max.z >= p.z
    }

    fn count_terminals(node: &BisectionNode) -> usize {
        if node.is_terminal() {
            return 1;
        }
        node.left().map_or(0, count_terminals) + node.right().map_or(0, count_terminals)
    }

    fn sum_terminal_points(node: &BisectionNode) -> usize {
        if node.is_terminal() {
            return node.point_ids().len();
        }
        node.left().map_or(0, sum_terminal_points) + node.right().map_or(0, sum_terminal_points)
    }

    #[test]
    fn empty_input_is_graceful() {
        let mut points: Vec<Point3<f32>> = Vec::new();
        let tree = BisectionTree::build(&mut points, 4, 1).unwrap();

        assert!(tree.root().is_terminal());
        assert!(tree.leaf_bounds().is_empty());
    }

    #[test]
    fn zero_depth_yields_single_leaf() {
        let mut points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 4.0, 6.0),
        ];
        let tree = BisectionTree::build(&mut points, 0, 1).unwrap();

        assert_eq!(tree.leaf_bounds().len(), 1);
        assert_eq!(tree.leaf_bounds()[0].min(), Point3::origin());
        assert_eq!(tree.leaf_bounds()[0].max(), Point3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn splits_along_widest_axis() {
        // Wide in X, narrow in Y and Z: the root split must separate the two
        // X clusters.
        let mut points = vec![
            Point3::new(-10.0, 0.0, 0.1),
            Point3::new(-9.0, 0.2, 0.0),
            Point3::new(9.0, 0.1, 0.2),
            Point3::new(10.0, 0.0, 0.0),
        ];
        let tree = BisectionTree::build(&mut points, 1, 1).unwrap();

        let left = tree.root().left().unwrap();
        let right = tree.root().right().unwrap();
        assert_eq!(left.point_ids().len(), 2);
        assert_eq!(right.point_ids().len(), 2);
        // Left holds the above-midpoint (positive X) cluster.
        assert!(left.point_ids().iter().all(|&id| points[id as usize].x > 0.0));
    }

    #[test]
    fn collapsed_axes_still_split_via_wide_axis() {
        // Wide only along Y; X and Z are fully collapsed. The Y split must
        // still succeed.
        let mut points: Vec<Point3<f32>> =
            (0..8).map(|i| Point3::new(1.0, i as f32, 2.0)).collect();
        let tree = BisectionTree::build(&mut points, 2, 1).unwrap();

        assert!(!tree.root().is_terminal());
        assert_eq!(sum_terminal_points(tree.root()), 8);
    }

    #[test]
    fn coincident_points_are_fatal() {
        let mut points = vec![Point3::new(1.0, 2.0, 3.0); 6];
        let err = BisectionTree::build(&mut points, 4, 2).unwrap_err();
        assert_eq!(err.point_count, 6);
    }

    #[test]
    fn conservation_and_leaf_box_count() {
        let mut points = random_points(100, 11);
        let original = points.clone();
        let tree = BisectionTree::build(&mut points, 3, 5).unwrap();

        // No point created or destroyed.
        assert_eq!(sum_terminal_points(tree.root()), 100);
        // One leaf box per terminal node.
        assert_eq!(tree.leaf_bounds().len(), count_terminals(tree.root()));

        // The union of leaf boxes covers every input point.
        for point in &original {
            assert!(
                tree.leaf_bounds().iter().any(|b| covered_by(b, *point)),
                "point {point} not covered by any leaf box"
            );
        }
    }

    #[test]
    fn points_are_translated_back() {
        let mut points = random_points(50, 3);
        for point in points.iter_mut() {
            *point += nalgebra::Vector3::new(100.0, -250.0, 40.0);
        }
        let original = points.clone();

        BisectionTree::build(&mut points, 3, 2).unwrap();

        for (after, before) in points.iter().zip(&original) {
            assert!(
                (after - before).norm() < 1e-3,
                "point drifted from {before} to {after}"
            );
        }
    }

    #[test]
    fn leaf_boxes_are_in_world_space() {
        // A cloud far from the origin: leaf boxes must come back in the
        // cloud's coordinates, not the re-centered ones.
        let mut points = random_points(40, 9);
        for point in points.iter_mut() {
            *point += nalgebra::Vector3::new(1000.0, 0.0, 0.0);
        }

        let tree = BisectionTree::build(&mut points, 2, 4).unwrap();
        for bounds in tree.leaf_bounds() {
            assert!(bounds.min().x > 900.0);
            assert!(bounds.max().x < 1100.0);
        }
    }
}
