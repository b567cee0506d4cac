//! Configuration error types.

use std::path::PathBuf;

/// Errors from reading, writing, or parsing `config.ron`.
///
/// Every variant names the file involved so callers can report it as is.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file or its directory could not be read.
    #[error("cannot read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file or its directory could not be written.
    #[error("cannot write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid RON for [`crate::Config`].
    #[error("invalid config in {}: {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// The in-memory config could not be rendered as RON.
    #[error("cannot serialize config: {0}")]
    SerializeError(#[source] ron::Error),
}
