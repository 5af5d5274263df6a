//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `draftkit-adapters` crate provides implementations.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::application::context::ValidationContext;
use crate::domain::{
    DetectedLanguage, LanguageId, ManifestSet, PathKind, Profile, ProjectSignals,
    ValidationFailure, ValidationReport,
};
use crate::error::DraftResult;

// ── Filesystem ───────────────────────────────────────────────────────────────

/// One entry yielded by [`Filesystem::walk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub kind: PathKind,
}

impl WalkEntry {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: PathKind::File,
        }
    }

    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: PathKind::Directory,
        }
    }
}

/// A walk failed at `path`.
#[derive(Debug)]
pub struct WalkError {
    pub path: PathBuf,
    pub source: io::Error,
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for WalkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Lazily evaluated walk over a subtree.
pub type Walk = Box<dyn Iterator<Item = Result<WalkEntry, WalkError>>>;

/// Port for read-only filesystem access.
///
/// Implemented by:
/// - `draftkit_adapters::filesystem::LocalFilesystem` (production)
/// - `draftkit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `walk` yields the root first, then descends depth-first with entries of
///   each directory in lexical order. The order is part of the contract.
/// - Errors are reported per entry so callers decide whether to abort.
pub trait Filesystem: Send + Sync {
    /// Stat a path.
    fn classify(&self, path: &Path) -> io::Result<PathKind>;

    /// Walk the subtree rooted at `root`.
    fn walk(&self, root: &Path) -> Walk;

    /// Read a file as UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

// ── Language detection ───────────────────────────────────────────────────────

/// Port for source-language classification.
///
/// Implemented by:
/// - `draftkit_adapters::classifier::ExtensionClassifier`
#[cfg_attr(test, mockall::automock)]
pub trait LanguageClassifier: Send + Sync {
    /// Languages found under `dir`, most confident first.
    ///
    /// The order is authoritative; callers never re-sort it.
    fn process_dir(&self, dir: &Path) -> DraftResult<Vec<DetectedLanguage>>;
}

/// Port for the set of installable profiles visible from one root.
#[cfg_attr(test, mockall::automock)]
pub trait ProfileRegistry: Send + Sync {
    /// Whether a profile exists for `id`.
    fn contains_language(&self, id: &LanguageId) -> bool;

    /// The profile for `id`, if any.
    fn get_config(&self, id: &LanguageId) -> Option<Profile>;

    /// Every identifier with a profile, sorted.
    fn languages(&self) -> Vec<LanguageId>;
}

/// Port for opening a [`ProfileRegistry`] scoped to a project root.
///
/// Implemented by:
/// - `draftkit_adapters::profile_store::ProfileCatalog`
#[cfg_attr(test, mockall::automock)]
pub trait RegistryFactory: Send + Sync {
    fn create(&self, root: &Path) -> DraftResult<Box<dyn ProfileRegistry>>;
}

/// Port for the named signals that drive variant substitution.
///
/// Implemented by:
/// - `draftkit_adapters::signals::MarkerSignalProbe`
#[cfg_attr(test, mockall::automock)]
pub trait SignalProbe: Send + Sync {
    fn probe(&self, dir: &Path) -> DraftResult<ProjectSignals>;
}

// ── Validation ───────────────────────────────────────────────────────────────

/// Port for the manifest rule engine.
///
/// Implemented by:
/// - `draftkit_adapters::rules::ManifestRuleEngine`
///
/// The engine owns all rule logic; callers only pass manifests through.
/// Implementations should check `ctx.is_cancelled()` between manifests.
pub trait RuleEngine: Send + Sync {
    fn validate_manifests(
        &self,
        ctx: &ValidationContext,
        fs: &dyn Filesystem,
        manifests: &ManifestSet,
    ) -> Result<ValidationReport, ValidationFailure>;
}
