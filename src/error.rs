//! Error types for channel-picker.
//!
//! This module provides error handling following the thiserror pattern.
//! Error types are designed to be informative, actionable, and suitable for
//! both programmatic handling and user-facing display.

use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for channel-picker operations.
#[derive(Error, Debug)]
pub enum PickerError {
    /// The directory service could not deliver the team/channel tree.
    ///
    /// This is a terminal render state for the picker core; retry is a
    /// host-level concern triggered by re-invoking the load.
    #[error("Directory unavailable: {reason}")]
    DirectoryUnavailable {
        /// Human-readable description of the failure.
        reason: String,
        /// Underlying transport/auth error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Teams file not found.
    #[error("Teams file not found: {path}")]
    TeamsFileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// Teams file could not be parsed.
    #[error("Invalid teams file: {path}: {reason}")]
    InvalidTeamsFile {
        /// Path to the invalid file.
        path: PathBuf,
        /// Reason why the file is invalid.
        reason: String,
    },

    /// Configuration error.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Human-readable error message.
        message: String,
    },

    /// TUI error.
    #[error("TUI error: {message}")]
    TuiError {
        /// Human-readable error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {context}")]
    IoError {
        /// Context describing the operation that failed.
        context: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {context}")]
    SerializationError {
        /// Context describing the operation that failed.
        context: String,
        /// Underlying serde_json error.
        #[source]
        source: serde_json::Error,
    },

    /// Unsupported operation or feature.
    #[error("Unsupported: {feature}")]
    Unsupported {
        /// Name of the unsupported feature.
        feature: String,
    },
}

impl PickerError {
    /// Create a new directory-unavailable error without a source.
    #[must_use]
    pub fn directory(reason: impl Into<String>) -> Self {
        Self::DirectoryUnavailable {
            reason: reason.into(),
            source: None,
        }
    }

    /// Create a new directory-unavailable error with a source.
    #[must_use]
    pub fn directory_with_source(
        reason: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DirectoryUnavailable {
            reason: reason.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new I/O error with context.
    #[must_use]
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            context: context.into(),
            source,
        }
    }

    /// Create a new TUI error.
    #[must_use]
    pub fn tui(message: impl Into<String>) -> Self {
        Self::TuiError {
            message: message.into(),
        }
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::DirectoryUnavailable { .. } => 2,
            Self::TeamsFileNotFound { .. } => 3,
            Self::InvalidTeamsFile { .. } => 4,
            Self::InvalidConfig { .. } => 5,
            Self::IoError { .. } => 74,
            _ => 1,
        }
    }
}

/// Result type alias for channel-picker operations.
pub type Result<T> = std::result::Result<T, PickerError>;

impl From<std::io::Error> for PickerError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            context: "I/O operation failed".to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for PickerError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            context: "JSON operation failed".to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let dir_err = PickerError::directory("network down");
        assert_eq!(dir_err.exit_code(), 2);

        let not_found = PickerError::TeamsFileNotFound {
            path: PathBuf::from("/teams.json"),
        };
        assert_eq!(not_found.exit_code(), 3);

        let tui = PickerError::tui("no terminal");
        assert_eq!(tui.exit_code(), 1);
    }

    #[test]
    fn test_directory_error_display() {
        let err = PickerError::directory("auth token expired");
        assert_eq!(err.to_string(), "Directory unavailable: auth token expired");
    }
}
