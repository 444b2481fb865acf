//! Error types for tree construction.

use thiserror::Error;

/// The point set could not be bisected along any axis.
///
/// Raised by [`BisectionTree::build`](crate::BisectionTree::build) when the
/// widest-axis split and both fallback axes all leave one side empty. This
/// only happens for degenerate geometry: every point coincides (or the set
/// collapses onto the split midpoint on all three axes), yet the set is still
/// larger than the leaf threshold. Continuing would corrupt the tree, so the
/// build aborts instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("point set of {point_count} cannot be bisected along any axis")]
pub struct DegenerateGeometryError {
    /// Number of points in the unsplittable subset.
    pub point_count: usize,
}
