//! Error types for the detection pipeline.
//!
//! A missing ignore file is never an error (see [`crate::core::ignore`]);
//! everything else that can go wrong during scan, render or reconcile
//! surfaces as a [`NoiseError`].

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error returned by a review-thread transport.
pub type RemoteError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum NoiseError {
    /// The tree walk could not list the root or one of its entries.
    #[error("Failed to scan {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize outputs: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid option '{name}': {reason}")]
    InvalidOption { name: &'static str, reason: String },

    /// A list/create/update/delete call on the review thread failed.
    #[error("Review comment {operation} failed: {source}")]
    Remote {
        operation: &'static str,
        #[source]
        source: RemoteError,
    },
}

impl NoiseError {
    pub fn remote<E>(operation: &'static str, err: E) -> Self
    where
        E: Into<RemoteError>,
    {
        Self::Remote {
            operation,
            source: err.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NoiseError>;
