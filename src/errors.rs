//! Shared error types for sitterview.
//!
//! The view model itself never fails: malformed record fields, unknown sort
//! keys and out-of-range page indices are all recovered locally. Errors only
//! surface at the edges, when parsing user-supplied strings, loading
//! configuration, decoding record files, or talking to a stopped input task.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sitterview operations
#[derive(Debug, Error)]
pub enum ViewError {
    /// A sort key string did not name any known key
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// A sort direction string was neither ascending nor descending
    #[error("Unknown sort direction: {0}")]
    UnknownDirection(String),

    /// A species string did not name any known species
    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        path: Option<PathBuf>,
    },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// The debounce task has stopped and no longer accepts input
    #[error("Input closed: the debounce task is no longer running")]
    InputClosed,

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl ViewError {
    /// Create a configuration error without path context.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error with path context.
    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Configuration {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Configuration { path, .. } => path.as_ref(),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ViewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ViewError::config("page_size must be positive");
        assert_eq!(
            err.to_string(),
            "Configuration error: page_size must be positive"
        );
        assert!(err.path().is_none());
    }

    #[test]
    fn test_config_error_keeps_path() {
        let err = ViewError::config_with_path("bad", "/tmp/.sitterview.toml");
        assert_eq!(
            err.path(),
            Some(&PathBuf::from("/tmp/.sitterview.toml"))
        );
    }

    #[test]
    fn test_unknown_sort_key_display() {
        let err = ViewError::UnknownSortKey("popularity".to_string());
        assert_eq!(err.to_string(), "Unknown sort key: popularity");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ViewError = io.into();
        assert!(matches!(err, ViewError::Io(_)));
    }
}
