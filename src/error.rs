//! Error types and handling infrastructure for emptystate.
//!
//! Presenting and hiding overlays never fails: every presenter operation is total over its
//! inputs. Errors only come from the edges of the crate, namely terminal setup for the demo
//! screen and loading overlay configuration from disk.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for emptystate operations.
#[derive(Error, Debug)]
pub enum EmptyStateError {
    /// Terminal or file system I/O failed
    #[error("I/O operation failed: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// UI and terminal related errors
    #[error("UI operation failed: {message}")]
    Ui { message: String },

    /// Configuration could not be read or parsed
    #[error("Configuration error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Invalid command line arguments or configuration values
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Standard Result type for emptystate operations.
pub type Result<T> = std::result::Result<T, EmptyStateError>;

impl EmptyStateError {
    /// Create an Io error with additional context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a Ui error with a descriptive message
    pub fn ui(message: impl Into<String>) -> Self {
        Self::Ui {
            message: message.into(),
        }
    }

    /// Create a Config error for the given file
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for EmptyStateError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => Self::Io {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::Io {
                message: "I/O operation failed".to_string(),
                source: err,
            },
        }
    }
}
