// ============================================================================
// domain/error.rs - DOMAIN INVARIANT VIOLATIONS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside application errors)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Language identifier cannot be empty")]
    EmptyLanguageId,

    #[error("Invalid language identifier '{id}': {reason}")]
    InvalidLanguageId { id: String, reason: String },

    #[error("Invalid alias '{raw}' -> '{canonical}': {reason}")]
    InvalidAlias {
        raw: String,
        canonical: String,
        reason: String,
    },

    #[error("Invalid variant rule '{base}' -> '{variant}': {reason}")]
    InvalidVariantRule {
        base: String,
        variant: String,
        reason: String,
    },

    #[error("Invalid profile '{id}': {reason}")]
    InvalidProfile { id: String, reason: String },

    #[error("Confidence for '{language}' out of range: {percent}")]
    InvalidConfidence { language: String, percent: f64 },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyLanguageId => vec![
                "Pass a language such as --language go".into(),
                "Or remove the empty `detect.language` entry from your config".into(),
            ],
            Self::InvalidLanguageId { id, .. } => vec![
                format!("'{}' is not a usable identifier", id),
                "Identifiers cannot contain control characters".into(),
            ],
            Self::InvalidAlias { raw, .. } => vec![
                format!("Fix the alias entry for '{}' in `detect.aliases`", raw),
            ],
            Self::InvalidVariantRule { base, .. } => vec![
                format!("Check the `detect.variants` entry for '{}'", base),
                "A variant rule needs a base, a different variant and at least one signal".into(),
            ],
            Self::InvalidProfile { id, .. } => vec![
                format!("Profile '{}' is malformed", id),
                "Check its profile.toml under .draftkit/profiles".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyLanguageId | Self::InvalidLanguageId { .. } => ErrorCategory::Validation,
            Self::InvalidAlias { .. } | Self::InvalidVariantRule { .. } => {
                ErrorCategory::Configuration
            }
            Self::InvalidProfile { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    NotFound,
    Internal,
}
