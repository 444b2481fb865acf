//! Frame-to-frame structural diff of quadtrees.

use super::node::QuadTreeNode;
use super::tree::QuadTree;

/// Scores the structural difference between two frames' quadtrees.
///
/// Walks both trees in lock-step over the 4 quadrant slots. A quadrant
/// occupied in exactly one tree contributes `1 / (4 * depth)` at that
/// child's depth, so occupancy changes near the root dominate the score;
/// quadrants occupied in both trees recurse, and quadrants occupied in
/// neither contribute nothing.
///
/// The score is non-negative, zero for structurally identical trees, and
/// symmetric in its arguments. Both trees must cover the same view region
/// (guaranteed for trees from [`QuadTree::build`], which share the fixed
/// subdivision schedule).
pub fn dynamic_score(previous: &QuadTree, current: &QuadTree) -> f32 {
    score_nodes(previous.root(), current.root())
}

fn score_nodes(prev: &QuadTreeNode, curr: &QuadTreeNode) -> f32 {
    debug_assert_eq!(prev.depth(), curr.depth());

    let mut sum = 0.0;
    for index in 0..4 {
        match (prev.child(index), curr.child(index)) {
            (Some(p), Some(c)) => sum += score_nodes(p, c),
            (Some(lone), None) | (None, Some(lone)) => {
                sum += 1.0 / (4 * lone.depth()) as f32;
            }
            (None, None) => {}
        }
    }
    sum
}

/// Retains the previous frame's quadtree for scoring against the next one.
///
/// Replaces global last-frame state with an explicit value owned by the
/// render loop: feed each frame's tree to [`advance`](DeltaTracker::advance)
/// and act on the returned score. The previous tree is dropped as soon as it
/// has been scored against.
#[derive(Debug, Default)]
pub struct DeltaTracker {
    previous: Option<QuadTree>,
}

impl DeltaTracker {
    /// Creates a tracker with no previous frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores `current` against the retained previous frame, then keeps
    /// `current` for the next call.
    ///
    /// Returns `None` on the first frame (nothing to compare against).
    pub fn advance(&mut self, current: QuadTree) -> Option<f32> {
        let score = self
            .previous
            .as_ref()
            .map(|previous| dynamic_score(previous, &current));
        self.previous = Some(current);
        score
    }

    /// Returns the retained tree, if a frame has been observed.
    #[inline]
    pub fn previous(&self) -> Option<&QuadTree> {
        self.previous.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Aabb2;
    use nalgebra::Point2;

    fn boxed(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Aabb2 {
        Aabb2::new(Point2::new(min_x, min_y), Point2::new(max_x, max_y))
    }

    /// A box confined to a single depth-2 subquadrant of the low-x/low-y
    /// quadrant.
    fn deep_corner_box() -> Aabb2 {
        boxed(-0.9, -0.9, -0.8, -0.8)
    }

    #[test]
    fn identical_trees_score_zero() {
        let boxes = [boxed(-0.6, -0.6, 0.1, 0.4), boxed(0.2, 0.2, 0.9, 0.9)];
        let tree = QuadTree::build(&boxes, 8);
        assert_eq!(dynamic_score(&tree, &tree), 0.0);
    }

    #[test]
    fn empty_trees_score_zero() {
        let a = QuadTree::build(&[], 8);
        let b = QuadTree::build(&[], 8);
        assert_eq!(dynamic_score(&a, &b), 0.0);
    }

    #[test]
    fn appearing_quadrant_scores_by_depth() {
        let empty = QuadTree::build(&[], 1);
        let occupied = QuadTree::build(&[deep_corner_box()], 1);

        // One child appears at depth 1: 1 / (4 * 1).
        assert_eq!(dynamic_score(&empty, &occupied), 0.25);
    }

    #[test]
    fn score_is_symmetric() {
        let a = QuadTree::build(&[deep_corner_box()], 3);
        let b = QuadTree::build(&[boxed(0.3, 0.3, 0.4, 0.4)], 3);
        assert_eq!(dynamic_score(&a, &b), dynamic_score(&b, &a));
    }

    #[test]
    fn shallow_change_outweighs_deep_change() {
        // Shallow: quadrant appears at depth 1.
        let shallow_prev = QuadTree::build(&[], 1);
        let shallow_curr = QuadTree::build(&[deep_corner_box()], 1);
        let shallow = dynamic_score(&shallow_prev, &shallow_curr);

        // Deep: same quadrant occupied in both, but only one tree keeps
        // subdividing, so the difference registers at depth 2.
        let deep_prev = QuadTree::build(&[deep_corner_box()], 1);
        let deep_curr = QuadTree::build(&[deep_corner_box()], 3);
        let deep = dynamic_score(&deep_prev, &deep_curr);

        assert!(deep > 0.0);
        assert!(
            shallow > deep,
            "shallow {shallow} should outweigh deep {deep}"
        );
    }

    #[test]
    fn score_is_non_negative() {
        let frames = [
            QuadTree::build(&[], 5),
            QuadTree::build(&[deep_corner_box()], 5),
            QuadTree::build(&[boxed(-0.5, -0.5, 0.5, 0.5)], 5),
            QuadTree::build(&[boxed(0.1, 0.1, 0.2, 0.9)], 5),
        ];
        for a in &frames {
            for b in &frames {
                assert!(dynamic_score(a, b) >= 0.0);
            }
        }
    }

    #[test]
    fn tracker_scores_from_the_second_frame() {
        let mut tracker = DeltaTracker::new();
        assert!(tracker.previous().is_none());

        let first = QuadTree::build(&[deep_corner_box()], 4);
        assert_eq!(tracker.advance(first), None);
        assert!(tracker.previous().is_some());

        // Identical second frame: zero change.
        let second = QuadTree::build(&[deep_corner_box()], 4);
        assert_eq!(tracker.advance(second), Some(0.0));

        // A different third frame: positive change.
        let third = QuadTree::build(&[], 4);
        let score = tracker.advance(third).unwrap();
        assert!(score > 0.0);
    }
}
