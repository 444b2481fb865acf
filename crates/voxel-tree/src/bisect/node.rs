//! Bisection tree node implementation.

/// A node in the bisection tree.
///
/// Holds the indices of the vertices assigned to it (into the point buffer
/// the tree was built over) and owns its two children. Terminal nodes have no
/// children; their bounding boxes live in the tree's leaf list.
#[derive(Debug, Clone)]
pub struct BisectionNode {
    /// Indices into the caller's point buffer.
    point_ids: Vec<u32>,

    /// Vertices with split-axis coordinate strictly above the midpoint.
    left: Option<Box<BisectionNode>>,

    /// Vertices at or below the midpoint.
    right: Option<Box<BisectionNode>>,
}

impl BisectionNode {
    pub(crate) fn new(point_ids: Vec<u32>) -> Self {
        Self {
            point_ids,
            left: None,
            right: None,
        }
    }

    /// Returns the indices of the vertices assigned to this node.
    #[inline]
    pub fn point_ids(&self) -> &[u32] {
        &self.point_ids
    }

    /// Returns the above-midpoint child.
    #[inline]
    pub fn left(&self) -> Option<&BisectionNode> {
        self.left.as_deref()
    }

    /// Returns the at-or-below-midpoint child.
    #[inline]
    pub fn right(&self) -> Option<&BisectionNode> {
        self.right.as_deref()
    }

    /// Returns `true` if this node was not split further.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn set_children(&mut self, left: BisectionNode, right: BisectionNode) {
        self.left = Some(Box::new(left));
        self.right = Some(Box::new(right));
    }
}
