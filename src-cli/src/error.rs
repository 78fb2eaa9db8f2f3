//! Error type for the command-line tool.

use std::path::PathBuf;

use thiserror::Error;

use crate::logging::LoggingError;

/// Result type alias for the command-line tool.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that end a `showreel` invocation.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error from the core library.
    #[error(transparent)]
    Core(#[from] showreel_core::Error),

    /// Logging could not be set up.
    #[error(transparent)]
    Logging(#[from] LoggingError),

    /// The configuration file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    ConfigFile {
        /// The file that was requested.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Report serialization failed.
    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),

    /// Some `extract` inputs had no video ID.
    #[error("{count} of {total} URLs did not contain a video ID")]
    UnrecognizedUrls {
        /// Number of rejected URLs.
        count: usize,
        /// Number of URLs given.
        total: usize,
    },
}
