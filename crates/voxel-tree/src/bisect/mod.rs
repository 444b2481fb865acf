//! Widest-axis bisection of 3D vertex clouds.
//!
//! A KD-style binary partition: each node splits its vertex subset at the
//! midpoint of its bounding box's widest axis, falling back to narrower axes
//! when a split leaves one side empty. Recursion stops at a depth limit or
//! when a side shrinks to the leaf threshold, and every terminal side
//! contributes one bounding box to the tree's leaf list.
//!
//! Midpoint splitting (rather than median-of-points) can produce unbalanced
//! trees on clustered data; that is an accepted property of the scheme.
//!
//! # Example
//!
//! ```ignore
//! use voxel_tree::BisectionTree;
//! use nalgebra::Point3;
//!
//! let mut points: Vec<Point3<f32>> = /* mesh vertices */;
//! let tree = BisectionTree::build(&mut points, 8, 16)?;
//! let boxes = tree.leaf_bounds();
//! ```

mod node;
mod tree;

pub use node::BisectionNode;
pub use tree::BisectionTree;
