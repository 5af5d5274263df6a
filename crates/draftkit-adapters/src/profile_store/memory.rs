//! In-memory profile registry with built-in profiles.

use std::{
    collections::BTreeMap,
    sync::{Arc, PoisonError, RwLock},
};

use draftkit_core::{
    application::{ApplicationError, ports::ProfileRegistry},
    domain::{DomainValidator as validator, LanguageId, Profile},
    error::{DraftError, DraftResult},
};

use crate::builtin_profiles;

/// Thread-safe in-memory registry keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    inner: Arc<RwLock<BTreeMap<LanguageId, Profile>>>,
}

impl InMemoryRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with built-in profiles loaded.
    pub fn with_builtin() -> DraftResult<Self> {
        let registry = Self::new();
        for profile in builtin_profiles::all_profiles()? {
            registry.insert(profile)?;
        }
        Ok(registry)
    }

    /// Insert a profile, replacing any profile with the same identifier.
    ///
    /// Returns the replaced profile.
    pub fn insert(&self, profile: Profile) -> DraftResult<Option<Profile>> {
        validator::validate_profile(&profile).map_err(DraftError::Domain)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::RegistryError {
                reason: "profile registry lock poisoned".into(),
            })?;

        Ok(inner.insert(profile.id.clone(), profile))
    }

    /// Get the number of profiles.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProfileRegistry for InMemoryRegistry {
    fn contains_language(&self, id: &LanguageId) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    fn get_config(&self, id: &LanguageId) -> Option<Profile> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    fn languages(&self) -> Vec<LanguageId> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> LanguageId {
        LanguageId::new(s).unwrap()
    }

    #[test]
    fn builtin_registry_supports_go_and_variant() {
        let registry = InMemoryRegistry::with_builtin().unwrap();
        assert!(registry.contains_language(&id("go")));
        assert!(registry.contains_language(&id("gomodule")));
        assert!(!registry.contains_language(&id("cobol")));
        assert_eq!(registry.get_config(&id("go")).unwrap().name, "Go");
    }

    #[test]
    fn languages_are_sorted() {
        let registry = InMemoryRegistry::with_builtin().unwrap();
        let langs = registry.languages();
        let mut sorted = langs.clone();
        sorted.sort();
        assert_eq!(langs, sorted);
        assert_eq!(langs.len(), registry.len());
    }

    #[test]
    fn insert_replaces_existing_profile() {
        let registry = InMemoryRegistry::with_builtin().unwrap();
        let replaced = registry
            .insert(Profile::local(id("go"), "Go (team)", "", "/tmp/go"))
            .unwrap();

        assert_eq!(replaced.unwrap().name, "Go");
        assert_eq!(registry.get_config(&id("go")).unwrap().name, "Go (team)");
    }

    #[test]
    fn insert_rejects_invalid_profile() {
        let registry = InMemoryRegistry::new();
        let result = registry.insert(Profile::builtin(id("go"), " ", ""));
        assert!(matches!(result, Err(DraftError::Domain(_))));
        assert!(registry.is_empty());
    }
}
