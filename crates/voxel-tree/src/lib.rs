//! Spatial partitioning trees for 3D rendering workloads.
//!
//! Three builders, all consuming a list of points and producing a partition
//! tree:
//!
//! - [`Octree`]: voxelizes a vertex cloud into axis-aligned boxes at a fixed
//!   depth, merging fully occupied regions ([`octree`]).
//! - [`BisectionTree`]: KD-style widest-axis midpoint bisection of a vertex
//!   cloud down to a depth or leaf-size threshold ([`bisect`]).
//! - [`QuadTree`]: occupancy quadtree over projected screen-space boxes,
//!   with a structural diff ([`dynamic_score`]) that scores frame-to-frame
//!   visual change for adaptive frame-rate control ([`quadtree`],
//!   [`FramerateController`]).
//!
//! Supporting pieces: strict-boundary bounding boxes ([`Aabb2`], [`Aabb3`]),
//! box-to-triangle-mesh expansion with OBJ export ([`VoxelMesh`]), and the
//! flat-coordinate interchange helper [`points_from_flat`] for external mesh
//! loaders.
//!
//! All builders are synchronous and single-threaded; recursion depth is
//! bounded by the caller-supplied maximum. Trees own their nodes exclusively
//! (parent-to-child `Box` links only) and refer to the caller's vertices by
//! index rather than copying them.

mod aabb2;
mod aabb3;
mod error;
mod framerate;
mod mesh;

pub mod bisect;
pub mod octree;
pub mod quadtree;

pub use aabb2::Aabb2;
pub use aabb3::Aabb3;
pub use bisect::{BisectionNode, BisectionTree};
pub use error::DegenerateGeometryError;
pub use framerate::FramerateController;
pub use mesh::{points_from_flat, VoxelMesh};
pub use octree::{octant_bounds, Octree, OctreeNode};
pub use quadtree::{dynamic_score, view_region, DeltaTracker, QuadTree, QuadTreeNode};
