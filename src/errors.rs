//! Error types for techmap.
//!
//! The engine itself cannot fail once its inputs are typed; every error
//! here comes from the boundary: reading files, decoding JSON or TOML, or
//! rejecting an assessment that breaks a structural invariant.
//!
//! # Error Codes
//!
//! - E001-E009: I/O and filesystem errors
//! - E010-E019: Input decoding errors
//! - E020-E029: Configuration errors
//! - E050-E059: Validation errors
//!
//! # Example
//!
//! ```rust
//! use techmap::errors::{Error, ErrorCode};
//!
//! let err = Error::validations(vec![
//!     "maturity.Process: rating 7 is outside 1..=5".to_string(),
//!     "priorities.ranking[2]: unknown priority 'Speed'".to_string(),
//! ]);
//! assert_eq!(err.code(), ErrorCode::VALIDATION);
//! assert!(err.is_user_fixable());
//! ```

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Structured error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// I/O error - file could not be read or written
    pub const IO_FILE: ErrorCode = ErrorCode("E001");

    /// Input error - malformed JSON
    pub const INPUT_JSON: ErrorCode = ErrorCode("E010");

    /// Config error - malformed TOML
    pub const CONFIG_PARSE: ErrorCode = ErrorCode("E020");
    /// Config error - invalid value
    pub const CONFIG_INVALID: ErrorCode = ErrorCode("E021");

    /// Validation error - assessment violates a structural invariant
    pub const VALIDATION: ErrorCode = ErrorCode("E050");

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Main error type for techmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Malformed JSON input
    #[error("Invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Malformed configuration file
    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration values out of range
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input violates one or more structural invariants
    #[error("{count} validation error(s): {}", .errors.join("; "))]
    Validation { count: usize, errors: Vec<String> },
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Create a JSON decoding error naming where the input came from
    pub fn json(origin: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            origin: origin.into(),
            source,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a validation error with a single message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::validations(vec![message.into()])
    }

    /// Create a validation error with multiple messages
    pub fn validations(errors: Vec<String>) -> Self {
        Self::Validation {
            count: errors.len(),
            errors,
        }
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::FileSystem { .. } => ErrorCode::IO_FILE,
            Self::Json { .. } => ErrorCode::INPUT_JSON,
            Self::Toml(_) => ErrorCode::CONFIG_PARSE,
            Self::Configuration(_) => ErrorCode::CONFIG_INVALID,
            Self::Validation { .. } => ErrorCode::VALIDATION,
        }
    }

    /// Whether the user can fix this by editing their input or config.
    #[must_use]
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::Json { .. } | Self::Toml(_) | Self::Configuration(_) | Self::Validation { .. }
        )
    }

    /// Individual messages for validation errors, otherwise the display text.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation { errors, .. } => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
