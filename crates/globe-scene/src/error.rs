//! Rebuild errors.

use globe_mesh::MeshError;
use thiserror::Error;

/// Why a build did not reach a stable state.
///
/// Parameters are validated before any derived state is discarded, so
/// `InvalidParameter` leaves the previous build intact. `Mesh` aborts a build
/// already under way and leaves the globe without regions or borders.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RebuildError {
    /// A parameter is out of its valid range.
    #[error("invalid {name}: {value} ({expected})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Rejected value, formatted.
        value: String,
        /// Valid range description.
        expected: &'static str,
    },

    /// A ring failed in a way that cannot be tolerated per ring.
    #[error("build aborted: {0}")]
    Mesh(#[from] MeshError),
}
