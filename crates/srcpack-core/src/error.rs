//! Error types for bundle operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `BundleError`.
pub type Result<T> = std::result::Result<T, BundleError>;

/// Errors that can occur while building a bundle.
#[derive(Error, Debug)]
pub enum BundleError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configured source root or standalone file does not exist.
    ///
    /// Only raised under [`MissingPolicy::Error`]; the default policy skips
    /// missing inputs silently.
    ///
    /// [`MissingPolicy::Error`]: crate::config::MissingPolicy::Error
    #[error("source not found: {path}")]
    SourceNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// A path could not be represented in the archive.
    #[error("invalid archive path: {reason}")]
    InvalidPath {
        /// Why the path was rejected.
        reason: String,
    },

    /// Compression level outside the valid 1-9 range.
    #[error("invalid compression level: {level} (must be 1-9)")]
    InvalidCompressionLevel {
        /// The rejected level.
        level: u8,
    },

    /// Two configured inputs map to the same archive destination.
    #[error("duplicate archive destination: {dest}")]
    DuplicateDestination {
        /// The colliding destination path.
        dest: String,
    },
}
