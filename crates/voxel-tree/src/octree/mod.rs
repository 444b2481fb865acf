//! Octree voxelization of 3D vertex clouds.
//!
//! The octree recursively splits a vertex cloud's bounding box into 8 equal
//! octants down to a fixed depth. Octants that contain no vertices are left
//! out entirely, so the tree is a sparse occupancy map of the cloud.
//!
//! # Example
//!
//! ```ignore
//! use voxel_tree::Octree;
//! use nalgebra::Point3;
//!
//! let points: Vec<Point3<f32>> = /* mesh vertices */;
//! let tree = Octree::build(&points, 6);
//!
//! // One box per occupied voxel, with fully-occupied regions merged.
//! let voxels = tree.collect_leaf_geometry();
//! ```
//!
//! # Architecture
//!
//! - [`Octree`]: the container holding the root node
//! - [`OctreeNode`]: an octant with up to 8 owned children
//! - [`octant_bounds`]: the fixed octant subdivision schedule

mod node;
mod tree;

pub use node::OctreeNode;
pub use tree::{octant_bounds, Octree};
