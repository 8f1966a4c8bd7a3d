//! Unified error handling for Siteforge Core.
//!
//! Stage checks deliberately keep most problems *out* of this type: a missing
//! file or a naming mismatch is a [`crate::findings::Finding`], not an error.
//! `CoreError` covers the unexpected cases — I/O failures, malformed JSON,
//! invalid user input to the scaffolder.

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for Siteforge Core operations.
#[derive(Debug, Error, Clone)]
pub enum CoreError {
    /// A filesystem operation failed.
    #[error("I/O error at {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// A JSON document could not be parsed.
    #[error("invalid JSON in {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    /// A user-supplied domain failed validation.
    #[error("invalid domain '{domain}': {reason}")]
    InvalidDomain { domain: String, reason: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CoreError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Io { path, .. } => vec![
                format!("Check that '{}' exists and is readable", path.display()),
                "Check file permissions".into(),
            ],
            Self::Parse { path, .. } => vec![
                format!("'{}' is not valid JSON", path.display()),
                "Regenerate it with: siteforge setup <domain>".into(),
            ],
            Self::InvalidDomain { .. } => vec![
                "Use a lowercase domain like \"example.com\"".into(),
                "The first label must contain at least one letter or digit".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Siteforge".into(),
                "Please report this issue at: https://github.com/cosecruz/siteforge/issues"
                    .into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Io { .. } => ErrorCategory::Internal,
            Self::Parse { .. } => ErrorCategory::Parse,
            Self::InvalidDomain { .. } => ErrorCategory::Validation,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Parse,
    Internal,
}

/// Convenient result type alias.
pub type CoreResult<T> = Result<T, CoreError>;
