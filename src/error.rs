//! Error types for frame analysis.
//!
//! All errors implement the `std::error::Error` trait and include structured
//! context for debugging and recovery guidance.
//!
//! ## Error Categories
//!
//! - **File Errors**: the byte source cannot be opened or read
//! - **End of Data**: the byte source is exhausted; a normal termination
//!   signal inside the scan loop, never surfaced from a completed analysis
//! - **Seek Errors**: the byte source cannot be repositioned during
//!   re-synchronization
//!
//! Corrupted frame data (unrecognized suffix, checksum mismatch, numbering
//! gap) is NOT an error: those conditions are recovered locally by the
//! synchronizer and reported through the statistics counters.
//!
//! ## Recovery and Retry
//!
//! ```rust
//! use framesift::FrameError;
//!
//! let error = FrameError::EndOfData;
//! if !error.is_retryable() {
//!     for suggestion in error.recovery_suggestions() {
//!         println!("  - {}", suggestion);
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for frame analysis operations.
pub type Result<T, E = FrameError> = std::result::Result<T, E>;

/// Main error type for frame analysis operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FrameError {
    #[error("Byte source error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The byte source has no more data. Expected termination signal:
    /// the analysis runner converts it into a normal statistics return.
    #[error("End of data reached")]
    EndOfData,

    #[error("Seek failed while repositioning {offset} bytes back: {details}")]
    Seek { offset: usize, details: String },
}

impl FrameError {
    /// Returns whether this error is potentially recoverable through retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            FrameError::File { .. } => false,
            FrameError::EndOfData => false,
            FrameError::Seek { .. } => false,
        }
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            FrameError::File { .. } => vec![
                "Check the file exists and is readable",
                "Check file permissions",
                "Verify the capture was copied completely",
            ],
            FrameError::EndOfData => vec![
                "End of data is normal termination; collect the statistics snapshot",
            ],
            FrameError::Seek { .. } => vec![
                "Verify the byte source supports backward seeking",
                "Check the source was not truncated mid-frame",
            ],
        }
    }

    /// Helper constructor for file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        FrameError::File { path, source }
    }

    /// Helper constructor for seek errors.
    pub fn seek_error(offset: usize, details: impl Into<String>) -> Self {
        FrameError::Seek { offset, details: details.into() }
    }
}

impl From<std::io::Error> for FrameError {
    fn from(err: std::io::Error) -> Self {
        FrameError::File { path: PathBuf::from("<unknown>"), source: err }
    }
}
