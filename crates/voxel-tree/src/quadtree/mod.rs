//! Screen-space quadtrees and frame-to-frame change scoring.
//!
//! A quadtree partitions the normalized view region `[-1,-1]..[1,1]` into
//! quadrants occupied by projected 2D bounding boxes. Comparing the quadtree
//! of the previous frame against the current one yields a *dynamic score*, a
//! bounded heuristic for how much the view changed; structural differences
//! near the root (large regions appearing or vanishing) weigh more than deep
//! ones.
//!
//! # Example
//!
//! ```ignore
//! use voxel_tree::{Aabb2, DeltaTracker, QuadTree};
//!
//! let mut tracker = DeltaTracker::new();
//! loop {
//!     let boxes: Vec<Aabb2> = /* projected bounds, one per scene object */;
//!     let tree = QuadTree::build(&boxes, 10);
//!     if let Some(score) = tracker.advance(tree) {
//!         /* throttle the frame rate on `score` */
//!     }
//! }
//! ```

mod delta;
mod node;
mod tree;

pub use delta::{dynamic_score, DeltaTracker};
pub use node::QuadTreeNode;
pub use tree::{view_region, QuadTree};
