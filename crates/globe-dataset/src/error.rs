//! Dataset loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// The dataset could not be made available.
///
/// Callers treat any of these as "no features": the globe renders empty.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset {}: {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The content is not a GeoJSON feature collection.
    #[error("failed to parse feature collection: {0}")]
    Parse(#[from] serde_json::Error),
}
