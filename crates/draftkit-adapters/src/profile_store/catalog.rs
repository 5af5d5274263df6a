//! Registry factory combining built-in and project-local profiles.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use draftkit_core::{
    application::ports::{ProfileRegistry, RegistryFactory},
    error::DraftResult,
};

use super::InMemoryRegistry;
use crate::profile_loader::LocalProfileLoader;

/// Project-relative directory searched for local profiles.
pub const DEFAULT_LOCAL_DIR: &str = ".draftkit/profiles";

/// Opens a registry scoped to a project root.
///
/// Each registry starts from the built-in profiles; local profiles found under
/// `<root>/<local_dir>` are layered on top and replace built-ins with the same
/// identifier.
#[derive(Debug, Clone)]
pub struct ProfileCatalog {
    local_dir: PathBuf,
}

impl ProfileCatalog {
    pub fn new() -> Self {
        Self {
            local_dir: PathBuf::from(DEFAULT_LOCAL_DIR),
        }
    }

    /// Use a different local profile directory. Relative paths are joined to
    /// the project root; absolute paths are used as is.
    pub fn with_local_dir(mut self, local_dir: impl Into<PathBuf>) -> Self {
        self.local_dir = local_dir.into();
        self
    }

    pub fn local_dir(&self) -> &Path {
        &self.local_dir
    }
}

impl Default for ProfileCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryFactory for ProfileCatalog {
    #[instrument(skip(self), fields(root = %root.display()))]
    fn create(&self, root: &Path) -> DraftResult<Box<dyn ProfileRegistry>> {
        let registry = InMemoryRegistry::with_builtin()?;

        let local = LocalProfileLoader::new(root.join(&self.local_dir)).load_all()?;
        for profile in local {
            let id = profile.id.clone();
            if registry.insert(profile)?.is_some() {
                info!(%id, "local profile overrides built-in");
            }
        }

        debug!(count = registry.len(), "registry ready");
        Ok(Box::new(registry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draftkit_core::domain::{LanguageId, ProfileSource};
    use std::fs;
    use tempfile::TempDir;

    fn id(s: &str) -> LanguageId {
        LanguageId::new(s).unwrap()
    }

    #[test]
    fn root_without_local_profiles_has_builtins() {
        let temp = TempDir::new().unwrap();
        let registry = ProfileCatalog::new().create(temp.path()).unwrap();

        assert!(registry.contains_language(&id("python")));
        assert_eq!(
            registry.get_config(&id("python")).unwrap().source,
            ProfileSource::Builtin
        );
    }

    #[test]
    fn local_profiles_extend_and_override() {
        let temp = TempDir::new().unwrap();
        let profiles = temp.path().join(DEFAULT_LOCAL_DIR);
        fs::create_dir_all(profiles.join("elixir")).unwrap();
        fs::write(
            profiles.join("elixir/profile.toml"),
            "[profile]\nname = \"Elixir\"\n",
        )
        .unwrap();
        fs::create_dir_all(profiles.join("python")).unwrap();
        fs::write(
            profiles.join("python/profile.toml"),
            "[profile]\nname = \"Python (uv)\"\n",
        )
        .unwrap();

        let registry = ProfileCatalog::new().create(temp.path()).unwrap();

        assert!(registry.contains_language(&id("elixir")));
        assert_eq!(
            registry.get_config(&id("python")).unwrap().name,
            "Python (uv)"
        );
        assert!(registry.languages().contains(&id("elixir")));
    }

    #[test]
    fn registries_are_scoped_to_their_root() {
        let with_local = TempDir::new().unwrap();
        let without = TempDir::new().unwrap();
        let dir = with_local.path().join("profiles/zig");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("profile.toml"), "[profile]\nname = \"Zig\"\n").unwrap();

        let catalog = ProfileCatalog::new().with_local_dir("profiles");

        assert!(
            catalog
                .create(with_local.path())
                .unwrap()
                .contains_language(&id("zig"))
        );
        assert!(
            !catalog
                .create(without.path())
                .unwrap()
                .contains_language(&id("zig"))
        );
    }
}
