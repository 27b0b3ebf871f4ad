//! Error types for the camera importer

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for camera importer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the camera importer
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("INVALID INPUT DIRECTORY {}", path.display())]
    InvalidInputDirectory { path: PathBuf },

    #[error("UNABLE TO RENAME {}: {source}", from.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("INCORRECT FORMAT {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("CAN NOT SCRAPE DATA FOR {}: {message}", path.display())]
    ExifRead { path: PathBuf, message: String },

    #[error("CAN NOT MOVE FILE {} to {}: {source}", origin.display(), destination.display())]
    Move {
        origin: PathBuf,
        destination: PathBuf,
        source: std::io::Error,
    },

    #[error("Directory traversal error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

impl Error {
    /// True for errors that must stop the run before any traversal
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::InvalidInputDirectory { .. })
    }
}
