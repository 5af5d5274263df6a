//! Specialized profile variants.
//!
//! Some languages can be scaffolded more than one way. A [`VariantRule`] says
//! "when `base` was resolved and every signal in `requires` is true for the
//! directory, use `variant` instead". Signals are plain names; where they come
//! from (marker files, operator flags) is the signal probe's business.

use std::collections::BTreeSet;

use crate::domain::{error::DomainError, value_objects::LanguageId};

/// Marker-file signal: a `go.mod` sits in the project root.
pub const GO_MODULE_SIGNAL: &str = "go-module";

/// Operator-declared signal that opts a Go module project into the
/// `gomodule` profile.
pub const GO_MODULE_VARIANT_SIGNAL: &str = "go-module-variant";

/// Named boolean facts observed true for one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSignals {
    active: BTreeSet<String>,
}

impl ProjectSignals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.insert(name);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.active.insert(name.into());
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.active.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ProjectSignals {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            active: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// One substitution rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRule {
    base: LanguageId,
    variant: LanguageId,
    requires: Vec<String>,
}

impl VariantRule {
    pub fn new<I, S>(
        base: impl AsRef<str>,
        variant: impl AsRef<str>,
        requires: I,
    ) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let invalid = |reason: String| DomainError::InvalidVariantRule {
            base: base.as_ref().to_string(),
            variant: variant.as_ref().to_string(),
            reason,
        };

        let base_id = LanguageId::new(base.as_ref()).map_err(|e| invalid(e.to_string()))?;
        let variant_id = LanguageId::new(variant.as_ref()).map_err(|e| invalid(e.to_string()))?;

        if base_id == variant_id {
            return Err(invalid("variant must differ from base".into()));
        }

        let requires: Vec<String> = requires
            .into_iter()
            .map(Into::into)
            .map(|s: String| s.trim().to_string())
            .collect();

        // A rule with no signals would fire unconditionally and hide the
        // base profile for good.
        if requires.is_empty() || requires.iter().any(String::is_empty) {
            return Err(invalid("at least one non-empty signal is required".into()));
        }

        Ok(Self {
            base: base_id,
            variant: variant_id,
            requires,
        })
    }

    pub fn base(&self) -> &LanguageId {
        &self.base
    }

    pub fn variant(&self) -> &LanguageId {
        &self.variant
    }

    pub fn requires(&self) -> &[String] {
        &self.requires
    }

    /// All required signals are set.
    pub fn is_satisfied(&self, signals: &ProjectSignals) -> bool {
        self.requires.iter().all(|s| signals.is_set(s))
    }
}

/// Ordered collection of variant rules; the first satisfied rule wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantRules {
    rules: Vec<VariantRule>,
}

impl VariantRules {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The rules draftkit ships with.
    ///
    /// `go` becomes `gomodule` only when the project has a `go.mod` *and* the
    /// operator has declared the variant signal.
    pub fn builtin() -> Self {
        let rules = VariantRule::new(
            "go",
            "gomodule",
            [GO_MODULE_SIGNAL, GO_MODULE_VARIANT_SIGNAL],
        )
        .map(|rule| vec![rule])
        .unwrap_or_default();
        Self { rules }
    }

    pub fn new(rules: Vec<VariantRule>) -> Self {
        Self { rules }
    }

    pub fn push(&mut self, rule: VariantRule) {
        self.rules.push(rule);
    }

    /// Rules whose base is `candidate`, in declaration order.
    pub fn rules_for<'a>(
        &'a self,
        candidate: &'a LanguageId,
    ) -> impl Iterator<Item = &'a VariantRule> + 'a {
        self.rules.iter().filter(move |r| r.base() == candidate)
    }

    pub fn has_rules_for(&self, candidate: &LanguageId) -> bool {
        self.rules_for(candidate).next().is_some()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VariantRule> {
        self.rules.iter()
    }
}
