//! Mesh construction errors.

use thiserror::Error;

/// Failures while building a region solid.
///
/// The tolerant builder entry point logs any of these and substitutes an empty
/// mesh for the offending ring.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The ring has fewer than three distinct points after closure.
    #[error("malformed ring: {points} point(s) after closure, need at least 3")]
    MalformedRing {
        /// Number of points in the open ring.
        points: usize,
    },

    /// The 2D triangulation primitive could not be invoked or failed.
    #[error("triangulation unavailable: {0}")]
    TriangulationUnavailable(String),

    /// The solid would need more vertices than a `u32` index buffer can address.
    #[error("ring of {points} points overflows a u32 index buffer")]
    IndexOverflow {
        /// Number of points in the open ring.
        points: usize,
    },
}
