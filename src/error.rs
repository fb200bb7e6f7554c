//! Error types for line sampling CLI operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for line sampling CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open input file
    #[error("{path}: {source}")]
    OpenInput {
        /// Path to the input file
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to create output file
    #[error("{}: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Requested sample size exceeds the number of input lines
    #[error("Sample size {size} out of range: input has {available} lines")]
    SampleSizeOutOfRange {
        /// The requested first-sample size
        size: usize,
        /// Number of lines actually available
        available: usize,
    },

    /// General I/O error
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Specialized `Result` type for line sampling CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<io::Error> for Error {
    fn from(source: io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match &err {
            Error::SampleSizeOutOfRange { .. } => io::Error::new(io::ErrorKind::InvalidInput, err),
            Error::OpenInput { source, .. }
            | Error::CreateOutput { source, .. }
            | Error::Io { source } => {
                // Preserve the original error kind
                io::Error::new(source.kind(), err)
            }
        }
    }
}
