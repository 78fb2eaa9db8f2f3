//! Error types for Showreel core operations.
//!
//! Errors are grouped by domain: the top-level [`Error`] wraps
//! [`ApiError`] for the video-metadata API and [`CacheError`] for the
//! key-value cache, next to a few plain variants for configuration and
//! input validation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Showreel core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A string is not a valid 11-character video ID.
    #[error("Invalid video ID: {0}")]
    InvalidVideoId(String),

    /// A URL does not contain a recognizable video ID.
    #[error("Invalid video URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The request could not be sent or the body could not be read.
    #[error("Network error: {0}")]
    Network(String),

    /// Video-metadata API error.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Cache error.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a network error from any displayable message.
    pub fn network_error(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// The error returned when no API credential is configured.
    #[must_use]
    pub fn missing_api_key() -> Self {
        Self::Configuration("YouTube API key is not configured".to_string())
    }

    /// Whether this error came from the remote API or the network.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Api(_))
    }
}

/// Errors returned by the video-metadata API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-success status.
    #[error("Failed to fetch video details: {status} {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body, if any.
        message: String,
    },

    /// The requested video does not exist or is private.
    #[error("Video not found: {id}. Please check the video ID and try again.")]
    NotFound {
        /// The requested video ID.
        id: String,
    },

    /// The response body could not be understood.
    #[error("Invalid API response: {reason}")]
    InvalidResponse {
        /// Parse failure description.
        reason: String,
    },
}

/// Errors raised by cache stores.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The backing storage cannot be used at all.
    #[error("Cache storage unavailable: {reason}")]
    StorageUnavailable {
        /// Reason reported by the backend.
        reason: String,
    },

    /// Reading a key failed.
    #[error("Failed to read cache key '{key}': {reason}")]
    ReadFailed {
        /// The cache key.
        key: String,
        /// Reason reported by the backend.
        reason: String,
    },

    /// Writing a key failed.
    #[error("Failed to write cache key '{key}': {reason}")]
    WriteFailed {
        /// The cache key.
        key: String,
        /// Reason reported by the backend.
        reason: String,
    },

    /// The cache directory could not be created.
    #[error("Failed to create cache directory {path}: {reason}")]
    DirectoryCreationFailed {
        /// Directory path.
        path: PathBuf,
        /// Reason reported by the OS.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_display() {
        let err = Error::missing_api_key();
        assert_eq!(
            err.to_string(),
            "Configuration error: YouTube API key is not configured"
        );
    }

    #[test]
    fn test_api_status_display() {
        let err = Error::from(ApiError::Status {
            status: 403,
            message: "quotaExceeded".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Failed to fetch video details: 403 quotaExceeded"
        );
        assert!(err.is_remote());
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::from(ApiError::NotFound {
            id: "r-_40oLqawY".to_string(),
        });
        assert!(err.to_string().contains("r-_40oLqawY"));
        assert!(err.to_string().contains("check the video ID"));
    }

    #[test]
    fn test_cache_error_is_not_remote() {
        let err = Error::from(CacheError::WriteFailed {
            key: "k".to_string(),
            reason: "quota".to_string(),
        });
        assert!(!err.is_remote());
        assert!(err.to_string().contains("'k'"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
