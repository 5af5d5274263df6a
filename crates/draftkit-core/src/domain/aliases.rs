//! Alias resolution: classifier spelling -> registry identifier.
//!
//! Classifiers report names the way linguists write them (`"C#"`,
//! `"Maven POM"`, `"TypeScript"`); profile registries key on short lowercase
//! identifiers (`csharp`, `java`, `javascript`). [`AliasTable`] is the single
//! explicit mapping between the two. It is built once, never mutated, and
//! handed to the resolver by value.
//!
//! # Adding a Built-in Alias
//!
//! Add one `(raw, canonical)` pair to [`BUILTIN_ALIASES`]. Raw names are
//! matched case-insensitively.

use std::collections::BTreeMap;

use crate::domain::{
    error::DomainError,
    value_objects::{DetectedLanguage, LanguageId},
};

/// Built-in alias pairs shipped with draftkit.
pub static BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("c#", "csharp"),
    ("f#", "fsharp"),
    ("c++", "cpp"),
    ("golang", "go"),
    ("maven pom", "java"),
    ("java server pages", "java"),
    ("groovy", "gradle"),
    ("kotlin", "gradle"),
    ("typescript", "javascript"),
    ("tsx", "javascript"),
    ("jsx", "javascript"),
    ("vue", "javascript"),
    ("jupyter notebook", "python"),
    ("erb", "ruby"),
    ("hack", "php"),
];

/// Immutable raw-name -> canonical-identifier lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: BTreeMap<String, LanguageId>,
}

impl AliasTable {
    /// Table with no entries: every name canonicalizes to its lowercase form.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Table seeded with [`BUILTIN_ALIASES`].
    pub fn builtin() -> Self {
        Self::builder().with_builtin().build()
    }

    pub fn builder() -> AliasTableBuilder {
        AliasTableBuilder::default()
    }

    /// Canonicalize a detected language.
    ///
    /// Names without an alias entry map to their own lowercase spelling.
    pub fn canonicalize(&self, detected: &DetectedLanguage) -> Result<LanguageId, DomainError> {
        self.resolve_name(&detected.name)
    }

    /// Canonicalize a raw name.
    pub fn resolve_name(&self, raw: &str) -> Result<LanguageId, DomainError> {
        let key = raw.trim().to_lowercase();
        match self.entries.get(&key) {
            Some(canonical) => Ok(canonical.clone()),
            None => LanguageId::new(key),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in raw-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageId)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Builder for [`AliasTable`]. Later entries override earlier ones, so
/// configured aliases can replace built-ins.
#[derive(Debug, Default)]
pub struct AliasTableBuilder {
    entries: BTreeMap<String, LanguageId>,
}

impl AliasTableBuilder {
    pub fn with_builtin(mut self) -> Self {
        for (raw, canonical) in BUILTIN_ALIASES {
            // Built-in pairs are lowercase literals and always valid.
            if let Ok(id) = LanguageId::new(canonical) {
                self.entries.insert((*raw).to_string(), id);
            }
        }
        self
    }

    pub fn alias(
        mut self,
        raw: impl AsRef<str>,
        canonical: impl AsRef<str>,
    ) -> Result<Self, DomainError> {
        let raw_key = raw.as_ref().trim().to_lowercase();
        if raw_key.is_empty() {
            return Err(DomainError::InvalidAlias {
                raw: raw.as_ref().to_string(),
                canonical: canonical.as_ref().to_string(),
                reason: "raw name cannot be empty".into(),
            });
        }

        let id = LanguageId::new(canonical.as_ref()).map_err(|e| DomainError::InvalidAlias {
            raw: raw.as_ref().to_string(),
            canonical: canonical.as_ref().to_string(),
            reason: e.to_string(),
        })?;

        self.entries.insert(raw_key, id);
        Ok(self)
    }

    pub fn build(self) -> AliasTable {
        AliasTable {
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_alias_is_rewritten() {
        let table = AliasTable::builtin();
        let id = table
            .canonicalize(&DetectedLanguage::new("C#", 80.0, "#178600"))
            .unwrap();
        assert_eq!(id.as_str(), "csharp");
    }

    #[test]
    fn lookup_ignores_case() {
        let table = AliasTable::builtin();
        assert_eq!(table.resolve_name("MAVEN POM").unwrap().as_str(), "java");
    }

    #[test]
    fn unknown_name_is_lowercased() {
        let table = AliasTable::builtin();
        assert_eq!(table.resolve_name("Go").unwrap().as_str(), "go");
        assert_eq!(table.resolve_name("Rust").unwrap().as_str(), "rust");
    }

    #[test]
    fn configured_alias_overrides_builtin() {
        let table = AliasTable::builder()
            .with_builtin()
            .alias("TypeScript", "typescript")
            .unwrap()
            .build();
        assert_eq!(
            table.resolve_name("TypeScript").unwrap().as_str(),
            "typescript"
        );
    }

    #[test]
    fn empty_raw_name_is_rejected() {
        assert!(matches!(
            AliasTable::builder().alias("  ", "go"),
            Err(DomainError::InvalidAlias { .. })
        ));
    }

    #[test]
    fn empty_canonical_is_rejected() {
        assert!(AliasTable::builder().alias("Go", "").is_err());
    }

    #[test]
    fn empty_table_has_no_entries() {
        let table = AliasTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.resolve_name("C#").unwrap().as_str(), "c#");
    }
}
