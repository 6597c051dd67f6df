//! Error types for backup trimming

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrimError {
    /// The root path is missing a required marker
    #[error("path must contain {markers}: {}", path.display())]
    Guard { path: PathBuf, markers: String },

    /// Nothing matching the backup naming pattern was found
    #[error("no {what} found under {}", path.display())]
    DiscoveryEmpty { path: PathBuf, what: &'static str },

    /// A directory needed for discovery could not be listed
    #[error("failed to list {}: {source}", path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Removing one unit failed; recorded per unit, never fatal
    #[error("error removing {}: {source}", path.display())]
    Deletion {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for trimming operations
pub type Result<T> = std::result::Result<T, TrimError>;
