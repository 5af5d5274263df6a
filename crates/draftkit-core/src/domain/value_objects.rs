//! Domain value objects: LanguageId, DetectedLanguage, PathKind.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! `LanguageId` is the canonical key shared by the alias table, the profile
//! registry and the variant rules; everything that crosses those boundaries
//! goes through it so that case and whitespace never leak into lookups.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── LanguageId ───────────────────────────────────────────────────────────────

/// Canonical, lowercase language identifier (e.g. `go`, `gomodule`, `csharp`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageId(String);

impl LanguageId {
    /// Normalise and validate an identifier.
    ///
    /// Surrounding whitespace is trimmed and the result is lowercased.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let id = raw.as_ref().trim().to_lowercase();

        if id.is_empty() {
            return Err(DomainError::EmptyLanguageId);
        }

        // Classifier names are free-form ("Maven POM", "Objective-C++"), so
        // only control characters are rejected.
        if let Some(bad) = id.chars().find(|c| c.is_control()) {
            return Err(DomainError::InvalidLanguageId {
                id: id.escape_debug().to_string(),
                reason: format!("control character {:?}", bad),
            });
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for LanguageId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LanguageId> for String {
    fn from(id: LanguageId) -> Self {
        id.0
    }
}

impl AsRef<str> for LanguageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── DetectedLanguage ─────────────────────────────────────────────────────────

/// One language found by a classifier in a directory.
///
/// `name` is the classifier's raw spelling (`"Go"`, `"C#"`, `"Maven POM"`);
/// it only becomes a [`LanguageId`] after alias resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedLanguage {
    pub name: String,
    pub percent: f64,
    pub color: String,
}

impl DetectedLanguage {
    pub fn new(name: impl Into<String>, percent: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            percent,
            color: color.into(),
        }
    }

    /// Reject confidences outside `0..=100` (and NaN).
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "language name",
            });
        }
        if !(0.0..=100.0).contains(&self.percent) {
            return Err(DomainError::InvalidConfidence {
                language: self.name.clone(),
                percent: self.percent,
            });
        }
        Ok(())
    }
}

impl fmt::Display for DetectedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}%)", self.name, self.percent)
    }
}

// ── PathKind ─────────────────────────────────────────────────────────────────

/// What a stat reported for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    File,
    Directory,
}

impl PathKind {
    pub const fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
