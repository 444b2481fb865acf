//! Quadtree node implementation.

/// A node in the screen-space quadtree.
///
/// Owns up to 4 children, one per quadrant of the region it covers;
/// `children[i]` being `None` means no projected box overlaps quadrant `i`.
///
/// The recorded depth (root 0, its children 1, ...) is fixed by the
/// subdivision schedule, so two trees built over the same view region carry
/// identical depths at matching positions. The delta scorer relies on this.
#[derive(Debug, Clone)]
pub struct QuadTreeNode {
    children: [Option<Box<QuadTreeNode>>; 4],
    is_full: bool,
    depth: usize,
}

impl QuadTreeNode {
    pub(crate) fn new(depth: usize) -> Self {
        Self {
            children: Default::default(),
            is_full: false,
            depth,
        }
    }

    /// Returns the child for quadrant `index`, if occupied.
    #[inline]
    pub fn child(&self, index: usize) -> Option<&QuadTreeNode> {
        self.children[index].as_deref()
    }

    /// Iterates over the 4 quadrant slots in order.
    pub fn children(&self) -> impl Iterator<Item = Option<&QuadTreeNode>> {
        self.children.iter().map(|c| c.as_deref())
    }

    /// Returns `true` if all 4 quadrants are occupied.
    ///
    /// Shallow bookkeeping only: the children's own occupancy is not
    /// considered (unlike the octree's deep completeness flag).
    #[inline]
    pub fn is_full(&self) -> bool {
        self.is_full
    }

    /// Returns this node's depth below the root (root is 0).
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn set_child(&mut self, index: usize, child: QuadTreeNode) {
        self.children[index] = Some(Box::new(child));
    }

    pub(crate) fn update_fullness(&mut self) {
        self.is_full = self.children.iter().all(|c| c.is_some());
    }
}
