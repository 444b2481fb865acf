//! Octree node implementation.

use crate::Aabb3;

/// A node in the octree.
///
/// Each node covers one octant of its parent's bounding box and owns up to 8
/// children, indexed by octant. Children are created only for octants that
/// contain at least one vertex, so `children[i]` being `None` means octant
/// `i` is unoccupied.
///
/// # Completeness
///
/// A node is a *complete subtree* when all 8 of its children exist and each
/// is either a leaf or itself complete. Complete subtrees describe fully
/// occupied volumes and are merged into a single box during geometry
/// extraction.
#[derive(Debug, Clone)]
pub struct OctreeNode {
    /// Octant indices from the root to this node. Empty for the root.
    path: Vec<u8>,

    /// The octant of space this node covers.
    bounds: Aabb3,

    /// Child octants; `None` where the octant holds no vertices.
    children: [Option<Box<OctreeNode>>; 8],

    is_leaf: bool,
    is_complete_subtree: bool,
}

impl OctreeNode {
    /// Creates a childless node covering `bounds`.
    pub(crate) fn new(path: Vec<u8>, bounds: Aabb3) -> Self {
        Self {
            path,
            bounds,
            children: Default::default(),
            is_leaf: false,
            is_complete_subtree: false,
        }
    }

    /// Returns the octant indices leading from the root to this node.
    ///
    /// The path length equals the node's depth; the root has an empty path.
    #[inline]
    pub fn path(&self) -> &[u8] {
        &self.path
    }

    /// Returns the octant of space this node covers.
    #[inline]
    pub fn bounds(&self) -> &Aabb3 {
        &self.bounds
    }

    /// Returns the child in octant `index`, if occupied.
    #[inline]
    pub fn child(&self, index: usize) -> Option<&OctreeNode> {
        self.children[index].as_deref()
    }

    /// Iterates over the 8 octant slots in order.
    pub fn children(&self) -> impl Iterator<Item = Option<&OctreeNode>> {
        self.children.iter().map(|c| c.as_deref())
    }

    /// Returns the number of occupied octants.
    pub fn child_count(&self) -> usize {
        self.children.iter().filter(|c| c.is_some()).count()
    }

    /// Returns `true` if this node terminates recursion.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Returns `true` if all 8 children exist and each is a leaf or itself
    /// complete.
    #[inline]
    pub fn is_complete_subtree(&self) -> bool {
        self.is_complete_subtree
    }

    pub(crate) fn set_child(&mut self, index: usize, child: OctreeNode) {
        self.children[index] = Some(Box::new(child));
    }

    pub(crate) fn mark_leaf(&mut self) {
        self.is_leaf = true;
    }

    pub(crate) fn mark_complete(&mut self) {
        self.is_complete_subtree = true;
    }
}
