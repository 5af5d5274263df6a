//! Resolve Service - language detection to scaffolding profile.
//!
//! Resolution workflow:
//! 1. An explicit override short-circuits detection entirely
//! 2. Otherwise classify the directory into ranked candidates
//! 3. Walk candidates in confidence order, skipping unusable or unsupported ones
//! 4. Apply a specialized variant if its signals hold
//! 5. Return the first supported profile
//!
//! The ranked walk with early return is the policy: the dominant language
//! wins whenever it has a profile, and a language without one falls through
//! to the next most likely candidate instead of failing.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{LanguageClassifier, ProfileRegistry, RegistryFactory, SignalProbe},
    },
    domain::{
        AliasTable, DetectedLanguage, DomainValidator as validator, LanguageId, Profile,
        ProjectSignals, ResolvedProfile, VariantRules,
    },
    error::{DraftError, DraftResult},
};

/// Language resolution service.
pub struct ResolveService {
    classifier: Box<dyn LanguageClassifier>,
    registries: Box<dyn RegistryFactory>,
    probe: Box<dyn SignalProbe>,
    aliases: AliasTable,
    variants: VariantRules,
}

impl ResolveService {
    /// Create a resolver with the built-in alias table and variant rules.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use draftkit_core::application::{ResolveService, ports::*};
    ///
    /// let service = ResolveService::new(
    ///     classifier, // impl LanguageClassifier
    ///     registries, // impl RegistryFactory
    ///     probe,      // impl SignalProbe
    /// );
    /// ```
    pub fn new(
        classifier: Box<dyn LanguageClassifier>,
        registries: Box<dyn RegistryFactory>,
        probe: Box<dyn SignalProbe>,
    ) -> Self {
        Self {
            classifier,
            registries,
            probe,
            aliases: AliasTable::builtin(),
            variants: VariantRules::builtin(),
        }
    }

    /// Replace the alias table.
    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    /// Replace the variant rules.
    pub fn with_variants(mut self, variants: VariantRules) -> Self {
        self.variants = variants;
        self
    }

    /// Resolve `directory` to a profile.
    ///
    /// A non-empty `language_override` is authoritative: if it has no profile
    /// the call fails, and detection is never consulted.
    #[instrument(
        skip_all,
        fields(
            directory = %directory.as_ref().display(),
            language_override = language_override.unwrap_or("")
        )
    )]
    pub fn resolve(
        &self,
        directory: impl AsRef<Path>,
        language_override: Option<&str>,
    ) -> DraftResult<ResolvedProfile> {
        let directory = directory.as_ref();

        if let Some(raw) = language_override.filter(|s| !s.trim().is_empty()) {
            return self.resolve_override(directory, raw);
        }

        let langs = self.detect(directory)?;
        self.resolve_detected(directory, &langs)
    }

    /// Resolve from an already-computed classifier ranking.
    ///
    /// Lets a caller that also shows the ranking classify the directory once.
    /// Entries are taken in order; the first one with a profile wins and the
    /// rest are never looked at, so an unusable entry is skipped rather than
    /// failing the run.
    pub fn resolve_detected(
        &self,
        directory: impl AsRef<Path>,
        langs: &[DetectedLanguage],
    ) -> DraftResult<ResolvedProfile> {
        let directory = directory.as_ref();

        if langs.is_empty() {
            return Err(no_language("no languages were detected"));
        }

        let registry = self.registries.create(directory)?;
        let mut signals: Option<ProjectSignals> = None;

        for detected in langs {
            if let Err(e) = validator::validate_detected(detected) {
                info!(language = %detected.name, error = %e, "--> Skipping unusable classifier entry");
                continue;
            }
            let candidate = match self.aliases.canonicalize(detected) {
                Ok(id) => id,
                Err(e) => {
                    info!(language = %detected.name, error = %e, "--> Skipping unusable language name");
                    continue;
                }
            };
            info!(
                "--> Detected {} ({:.2}%)",
                detected.name, detected.percent
            );

            if !registry.contains_language(&candidate) {
                info!(
                    "--> Could not find a profile for {}. Trying to find the next likely language match...",
                    detected.name
                );
                continue;
            }

            let identifier =
                self.apply_variant(directory, &candidate, registry.as_ref(), &mut signals)?;

            return match registry.get_config(&identifier) {
                Some(profile) => Ok(ResolvedProfile::new(profile, identifier)),
                None => Err(no_language(format!(
                    "registry lists '{identifier}' but returned no profile for it"
                ))),
            };
        }

        Err(no_language(format!(
            "none of the {} detected language(s) has a profile",
            langs.len()
        )))
    }

    /// Run the classifier alone, wrapping its failures with the directory.
    #[instrument(skip_all, fields(directory = %directory.as_ref().display()))]
    pub fn detect(&self, directory: impl AsRef<Path>) -> DraftResult<Vec<DetectedLanguage>> {
        let directory = directory.as_ref();

        let langs = self.classifier.process_dir(directory).map_err(|e| {
            detection_failed(directory, e)
        })?;

        for lang in &langs {
            debug!("{}:\t{:.2} ({})", lang.name, lang.percent, lang.color);
        }
        debug!("detected {} langs", langs.len());

        Ok(langs)
    }

    /// Identifiers with an installable profile under `root`.
    pub fn supported_languages(&self, root: impl AsRef<Path>) -> DraftResult<Vec<LanguageId>> {
        let registry = self.registries.create(root.as_ref())?;
        Ok(registry.languages())
    }

    /// Profiles available under `root`, in identifier order.
    pub fn supported_profiles(&self, root: impl AsRef<Path>) -> DraftResult<Vec<Profile>> {
        let registry = self.registries.create(root.as_ref())?;
        Ok(registry
            .languages()
            .iter()
            .filter_map(|id| registry.get_config(id))
            .collect())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn resolve_override(&self, directory: &Path, raw: &str) -> DraftResult<ResolvedProfile> {
        debug!("using configuration language");
        // An identifier that cannot exist cannot have a profile either.
        let identifier = LanguageId::new(raw)
            .map_err(|_| no_language(format!("no profile for configured language '{raw}'")))?;
        let registry = self.registries.create(directory)?;

        match registry.get_config(&identifier) {
            Some(profile) => Ok(ResolvedProfile::new(profile, identifier)),
            None => Err(no_language(format!(
                "no profile for configured language '{identifier}'"
            ))),
        }
    }

    /// Swap `candidate` for the first variant whose signals all hold.
    ///
    /// Signals are probed lazily and at most once per resolution.
    fn apply_variant(
        &self,
        directory: &Path,
        candidate: &LanguageId,
        registry: &dyn ProfileRegistry,
        signals: &mut Option<ProjectSignals>,
    ) -> DraftResult<LanguageId> {
        if !self.variants.has_rules_for(candidate) {
            return Ok(candidate.clone());
        }

        if signals.is_none() {
            *signals = Some(self.probe.probe(directory)?);
        }
        let Some(signals) = signals.as_ref() else {
            return Ok(candidate.clone());
        };

        for rule in self.variants.rules_for(candidate) {
            if !rule.is_satisfied(signals) {
                continue;
            }
            if !registry.contains_language(rule.variant()) {
                debug!(variant = %rule.variant(), "variant signals hold but registry has no profile");
                continue;
            }
            debug!("detected {} and all of {:?}", candidate, rule.requires());
            return Ok(rule.variant().clone());
        }

        Ok(candidate.clone())
    }
}

fn no_language(reason: impl Into<String>) -> DraftError {
    ApplicationError::NoLanguageDetected {
        reason: reason.into(),
    }
    .into()
}

fn detection_failed(directory: &Path, err: DraftError) -> DraftError {
    ApplicationError::DetectionFailed {
        path: PathBuf::from(directory),
        reason: err.to_string(),
    }
    .into()
}
