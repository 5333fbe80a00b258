//! Error types for anekdots operations.
//!
//! The text pipeline itself never fails. Errors come from the surrounding
//! collector: building the HTTP client, resolving URLs, corpus file I/O and
//! CLI argument handling. Unreachable pages are not errors; the page source
//! logs them and yields nothing.

use thiserror::Error;

/// Result type alias for anekdots operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Page source errors (client setup, URL handling).
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// I/O errors (corpus files).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Page source errors.
#[derive(Error, Debug)]
pub enum FetchError {
    /// A URL could not be parsed or joined.
    #[error("invalid URL: {url}: {reason}")]
    InvalidUrl {
        /// The offending URL or relative reference.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// I/O-specific errors for corpus files.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Directory creation error.
    #[error("failed to create directory: {path}: {reason}")]
    DirectoryFailed {
        /// Path to the directory.
        path: String,
        /// Reason for failure.
        reason: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Client(err.to_string())
    }
}
