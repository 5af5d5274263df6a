//! Application layer errors.
//!
//! These errors represent failures in orchestration, not domain invariants.
//! Invariant violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ValidationFailure;
use crate::error::ErrorCategory;

/// Errors that occur while resolving languages or validating manifests.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A required argument was empty.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A stat or directory walk failed.
    #[error("Could not {operation} {path}: {reason}")]
    PathError {
        operation: &'static str,
        path: PathBuf,
        reason: String,
    },

    /// Neither the override nor any detected language has a profile.
    #[error("No supported language detected: {reason}")]
    NoLanguageDetected { reason: String },

    /// The classifier itself failed.
    #[error("There was an error detecting the language in {path}: {reason}")]
    DetectionFailed { path: PathBuf, reason: String },

    /// The rule engine rejected the manifests. Displayed verbatim.
    #[error("{0}")]
    ValidationFailed(ValidationFailure),

    /// Store access failed (lock poisoned, etc.).
    #[error("Profile registry error: {reason}")]
    RegistryError { reason: String },
}

impl ApplicationError {
    pub fn path_error(
        operation: &'static str,
        path: impl Into<PathBuf>,
        reason: impl ToString,
    ) -> Self {
        Self::PathError {
            operation,
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],
            Self::PathError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the path exists and is readable".into(),
            ],
            Self::NoLanguageDetected { .. } => vec![
                "Run `draftkit list` to see languages with profiles".into(),
                "Or pick one explicitly with --language".into(),
            ],
            Self::DetectionFailed { path, .. } => vec![
                format!("Language detection could not read {}", path.display()),
                "Check directory permissions and try again".into(),
            ],
            Self::ValidationFailed(failure) if !failure.violations.is_empty() => vec![
                format!("Fix the {} finding(s) listed above", failure.violations.len()),
            ],
            Self::RegistryError { .. } => vec![
                "Check the profiles directory (.draftkit/profiles)".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::Validation,
            Self::PathError { .. } => ErrorCategory::Validation,
            Self::NoLanguageDetected { .. } => ErrorCategory::NotFound,
            Self::DetectionFailed { .. } => ErrorCategory::Internal,
            Self::ValidationFailed(_) => ErrorCategory::Rejected,
            Self::RegistryError { .. } => ErrorCategory::Configuration,
        }
    }
}
