//! Scaffolding profiles and the result of resolving one.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::LanguageId};

/// Where a profile was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum ProfileSource {
    /// Compiled into draftkit.
    Builtin,
    /// Loaded from a project-local profile directory.
    Local(PathBuf),
}

impl fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("builtin"),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A named bundle of scaffolding artifacts for one language.
///
/// The resolver treats this as opaque: it only ever hands it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: LanguageId,
    pub name: String,
    pub description: String,
    pub source: ProfileSource,
}

impl Profile {
    pub fn builtin(id: LanguageId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            source: ProfileSource::Builtin,
        }
    }

    pub fn local(
        id: LanguageId,
        name: impl Into<String>,
        description: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            source: ProfileSource::Local(path.into()),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidProfile {
                id: self.id.to_string(),
                reason: "display name cannot be empty".into(),
            });
        }
        Ok(())
    }
}

/// Outcome of a successful resolution: the profile and the identifier it was
/// resolved under (which may be a specialized variant of the detected
/// language).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedProfile {
    pub profile: Profile,
    pub identifier: LanguageId,
}

impl ResolvedProfile {
    pub fn new(profile: Profile, identifier: LanguageId) -> Self {
        Self {
            profile,
            identifier,
        }
    }
}

impl fmt::Display for ResolvedProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.identifier, self.profile.name)
    }
}
