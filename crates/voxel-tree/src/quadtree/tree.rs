//! Quadtree container and construction.

use nalgebra::Point2;

use crate::Aabb2;

use super::node::QuadTreeNode;

/// Returns the fixed view region, `[-1,-1]..[1,1]` in normalized device
/// coordinates. Every quadtree subdivides this same region, which is what
/// keeps two frames' trees structurally comparable.
pub fn view_region() -> Aabb2 {
    Aabb2::new(Point2::new(-1.0, -1.0), Point2::new(1.0, 1.0))
}

/// An occupancy quadtree over the normalized view region.
///
/// Built once per frame from the projected bounding boxes of the visible
/// geometry. A quadrant gets a child as soon as *some* input box overlaps it
/// (the scan stops at the first hit); quadrants nobody overlaps stay empty.
/// The overlap test is [`Aabb2::intersects`], whose permissive corner
/// semantics are part of the score's definition.
#[derive(Debug, Clone)]
pub struct QuadTree {
    root: QuadTreeNode,
}

impl QuadTree {
    /// Builds a quadtree over the view region from projected boxes.
    ///
    /// Subdivision proceeds while `depth + 1 < max_depth`, so `max_depth`
    /// bounds the deepest node at `max_depth - 1`; `max_depth == 0` yields
    /// only the root.
    pub fn build(boxes: &[Aabb2], max_depth: u32) -> Self {
        let mut root = QuadTreeNode::new(0);
        if max_depth > 0 {
            add_depth(&view_region(), boxes, 1, &mut root, max_depth as usize);
        }
        Self { root }
    }

    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &QuadTreeNode {
        &self.root
    }
}

/// Splits `area` into quadrants and attaches a child for each occupied one.
fn add_depth(
    area: &Aabb2,
    boxes: &[Aabb2],
    depth: usize,
    parent: &mut QuadTreeNode,
    max_depth: usize,
) {
    let min = area.min();
    let max = area.max();
    let mid = area.center();

    // Quadrant order: low-x/low-y, high-x/low-y, low-x/high-y, high-x/high-y.
    let quadrants = [
        Aabb2::new(min, mid),
        Aabb2::new(Point2::new(mid.x, min.y), Point2::new(max.x, mid.y)),
        Aabb2::new(Point2::new(min.x, mid.y), Point2::new(mid.x, max.y)),
        Aabb2::new(mid, max),
    ];

    for (index, quadrant) in quadrants.iter().enumerate() {
        // First overlapping input box wins; the rest are not consulted.
        if boxes.iter().any(|geometry| quadrant.intersects(geometry)) {
            let mut child = QuadTreeNode::new(depth);
            if depth + 1 < max_depth {
                add_depth(quadrant, boxes, depth + 1, &mut child, max_depth);
            }
            parent.set_child(index, child);
        }
    }

    parent.update_fullness();
}
