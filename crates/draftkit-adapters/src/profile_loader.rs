//! Filesystem-based profile loader.
//!
//! Discovers and parses `profile.toml` manifests from a project-local profile
//! directory, converting them into domain [`Profile`] objects.
//!
//! # Directory layout expected
//!
//! ```text
//! .draftkit/profiles/
//! ├── python/
//! │   └── profile.toml     ← manifest (required)
//! └── gomodule/
//!     └── profile.toml
//! ```
//!
//! # `profile.toml` format
//!
//! ```toml
//! [profile]
//! id          = "python"              # optional, defaults to the directory name
//! name        = "Python (uv)"
//! description = "uv-managed project"  # optional
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use draftkit_core::domain::{DomainError, DomainValidator, LanguageId, Profile};

const MANIFEST_FILE: &str = "profile.toml";

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of a `profile.toml` file.
#[derive(Debug, Deserialize, Clone)]
pub struct ProfileManifest {
    pub profile: ProfileSection,
}

/// `[profile]` section.
#[derive(Debug, Deserialize, Clone)]
pub struct ProfileSection {
    pub id: Option<String>,
    /// Display name shown by `draftkit list`.
    pub name: String,
    pub description: Option<String>,
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads [`Profile`] objects from a directory of `profile.toml` manifests.
///
/// Each immediate subdirectory containing a valid `profile.toml` is one
/// profile. Subdirectories whose manifest is missing or invalid emit a `WARN`
/// log and are skipped; they do not prevent other profiles from loading.
pub struct LocalProfileLoader {
    profiles_dir: PathBuf,
}

impl LocalProfileLoader {
    pub fn new(profiles_dir: impl Into<PathBuf>) -> Self {
        Self {
            profiles_dir: profiles_dir.into(),
        }
    }

    /// Load every valid profile, in directory-name order.
    ///
    /// A missing profiles directory is not an error: projects without local
    /// profiles are the common case.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidProfile`] if the directory exists but
    /// cannot be listed.
    #[instrument(skip(self), fields(dir = %self.profiles_dir.display()))]
    pub fn load_all(&self) -> Result<Vec<Profile>, DomainError> {
        if !self.profiles_dir.is_dir() {
            debug!("no local profiles directory");
            return Ok(Vec::new());
        }

        let mut profiles = Vec::new();

        let entries = WalkDir::new(&self.profiles_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in entries {
            let entry = entry.map_err(|e| DomainError::InvalidProfile {
                id: self.profiles_dir.display().to_string(),
                reason: format!("failed to read profiles directory: {e}"),
            })?;

            if !entry.file_type().is_dir() {
                continue;
            }

            match load_profile_from_dir(entry.path()) {
                Ok(profile) => {
                    debug!(id = %profile.id, "loaded local profile");
                    profiles.push(profile);
                }
                Err(e) => {
                    warn!(
                        dir   = %entry.path().display(),
                        error = %e,
                        "skipping profile directory due to load error"
                    );
                }
            }
        }

        debug!(count = profiles.len(), "finished loading local profiles");
        Ok(profiles)
    }
}

/// Load a single profile from one subdirectory.
fn load_profile_from_dir(dir: &Path) -> Result<Profile, DomainError> {
    let dir_name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let invalid = |reason: String| DomainError::InvalidProfile {
        id: dir_name.clone(),
        reason,
    };

    let manifest_path = dir.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Err(invalid(format!("missing {MANIFEST_FILE}")));
    }

    let raw = fs::read_to_string(&manifest_path)
        .map_err(|e| invalid(format!("failed to read '{}': {e}", manifest_path.display())))?;

    let manifest: ProfileManifest = toml::from_str(&raw)
        .map_err(|e| invalid(format!("failed to parse '{}': {e}", manifest_path.display())))?;

    let section = manifest.profile;
    let id = LanguageId::new(section.id.as_deref().unwrap_or(&dir_name))?;

    let profile = Profile::local(
        id,
        section.name,
        section.description.unwrap_or_default(),
        dir,
    );
    DomainValidator::validate_profile(&profile)?;
    Ok(profile)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use draftkit_core::domain::ProfileSource;
    use tempfile::TempDir;

    fn add_profile(root: &Path, dir: &str, manifest: &str) {
        let dir = root.join(dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(MANIFEST_FILE), manifest).unwrap();
    }

    #[test]
    fn missing_directory_yields_no_profiles() {
        let loader = LocalProfileLoader::new("/absolutely/does/not/exist");
        assert!(loader.load_all().unwrap().is_empty());
    }

    #[test]
    fn id_defaults_to_directory_name() {
        let temp = TempDir::new().unwrap();
        add_profile(temp.path(), "Python", "[profile]\nname = \"Python (uv)\"\n");

        let profiles = LocalProfileLoader::new(temp.path()).load_all().unwrap();

        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].id.as_str(), "python");
        assert_eq!(profiles[0].name, "Python (uv)");
        assert_eq!(
            profiles[0].source,
            ProfileSource::Local(temp.path().join("Python"))
        );
    }

    #[test]
    fn explicit_id_wins() {
        let temp = TempDir::new().unwrap();
        add_profile(
            temp.path(),
            "custom",
            r#"
[profile]
id          = "Elixir"
name        = "Elixir"
description = "mix release"
"#,
        );

        let profiles = LocalProfileLoader::new(temp.path()).load_all().unwrap();
        assert_eq!(profiles[0].id.as_str(), "elixir");
        assert_eq!(profiles[0].description, "mix release");
    }

    #[test]
    fn invalid_profiles_are_skipped() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("no-manifest")).unwrap();
        add_profile(temp.path(), "broken", "[profile\nname=");
        add_profile(temp.path(), "blank", "[profile]\nname = \"  \"\n");
        add_profile(temp.path(), "good", "[profile]\nname = \"Good\"\n");
        fs::write(temp.path().join("README.md"), "not a profile").unwrap();

        let profiles = LocalProfileLoader::new(temp.path()).load_all().unwrap();
        let ids: Vec<_> = profiles.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["good"]);
    }

    #[test]
    fn profiles_load_in_name_order() {
        let temp = TempDir::new().unwrap();
        add_profile(temp.path(), "zig", "[profile]\nname = \"Zig\"\n");
        add_profile(temp.path(), "ada", "[profile]\nname = \"Ada\"\n");

        let profiles = LocalProfileLoader::new(temp.path()).load_all().unwrap();
        let ids: Vec<_> = profiles.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["ada", "zig"]);
    }
}
