//! Unified application error types for TableHub.
//!
//! Every layer reports failures as [`AppError`]. The [`ErrorKind`] decides how
//! the HTTP layer answers: caller mistakes are echoed back, everything else is
//! logged and replaced by the endpoint's generic message.

use std::fmt;
use thiserror::Error;

/// Error categories used across TableHub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A required field is missing or malformed.
    Validation,
    /// A configured reservation policy was violated (e.g. party size limit).
    Policy,
    /// The booking or settings store failed.
    Database,
    /// The configuration could not be loaded or is inconsistent.
    Configuration,
    /// Anything else that is not the caller's fault.
    Internal,
}

impl ErrorKind {
    /// Whether this kind is caused by the caller rather than the system.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation | Self::Policy)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Validation => "VALIDATION",
            Self::Policy => "POLICY",
            Self::Database => "DATABASE",
            Self::Configuration => "CONFIGURATION",
            Self::Internal => "INTERNAL",
        };
        f.write_str(label)
    }
}

/// The unified application error.
///
/// Infrastructure errors keep their underlying cause in `source` so it can be
/// logged; the message is what a caller may see.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Missing or malformed input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// A booking that breaks the configured policy.
    pub fn policy(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Policy, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
