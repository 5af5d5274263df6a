//! YAML manifest rule engine.
//!
//! Reads every `.yaml`/`.yml` manifest in the set, splits it into documents,
//! and runs each [`ManifestRule`] against each document. Findings from all
//! manifests are collected before failing, so one run reports everything.

mod builtin;

pub use builtin::{NoLatestTag, ResourceLimits};

use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;
use tracing::{debug, instrument};

use draftkit_core::{
    application::{
        context::ValidationContext,
        ports::{Filesystem, RuleEngine},
    },
    domain::{ManifestSet, ValidationFailure, ValidationReport, Violation},
};

/// Rule id used for documents that are not valid YAML.
pub const YAML_SYNTAX_RULE: &str = "yaml-syntax";

/// One best-practice check over a single YAML document.
pub trait ManifestRule: Send + Sync {
    /// Stable identifier shown in findings.
    fn id(&self) -> &'static str;

    /// Human-readable findings; empty when the document passes.
    fn check(&self, doc: &Value) -> Vec<String>;
}

/// [`RuleEngine`] running [`ManifestRule`]s over YAML manifests.
pub struct ManifestRuleEngine {
    rules: Vec<Box<dyn ManifestRule>>,
}

impl ManifestRuleEngine {
    /// Engine with the built-in rules.
    pub fn new() -> Self {
        Self::with_rules(vec![Box::new(NoLatestTag), Box::new(ResourceLimits)])
    }

    pub fn with_rules(rules: Vec<Box<dyn ManifestRule>>) -> Self {
        Self { rules }
    }

    /// Identifiers of the active rules, in evaluation order.
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Check one manifest's content, appending findings to `violations`.
    ///
    /// Returns the number of documents checked.
    fn check_manifest(&self, path: &Path, content: &str, violations: &mut Vec<Violation>) -> usize {
        let mut documents = 0;

        for document in serde_yaml::Deserializer::from_str(content) {
            let value = match Value::deserialize(document) {
                Ok(value) => value,
                Err(e) => {
                    violations.push(Violation {
                        path: path.to_path_buf(),
                        rule: YAML_SYNTAX_RULE.into(),
                        message: e.to_string(),
                    });
                    break;
                }
            };

            if value.is_null() {
                continue;
            }
            documents += 1;

            for rule in &self.rules {
                violations.extend(rule.check(&value).into_iter().map(|message| Violation {
                    path: path.to_path_buf(),
                    rule: rule.id().into(),
                    message,
                }));
            }
        }

        documents
    }
}

impl Default for ManifestRuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

impl RuleEngine for ManifestRuleEngine {
    #[instrument(skip_all, fields(root = %manifests.root().display(), count = manifests.len()))]
    fn validate_manifests(
        &self,
        ctx: &ValidationContext,
        fs: &dyn Filesystem,
        manifests: &ManifestSet,
    ) -> Result<ValidationReport, ValidationFailure> {
        let mut report = ValidationReport::default();
        let mut violations = Vec::new();
        let mut failed_manifests = 0usize;

        for path in manifests.iter() {
            if ctx.is_cancelled() {
                return Err(ValidationFailure::new("validation cancelled"));
            }

            if !is_yaml(path) {
                debug!(path = %path.display(), "not a YAML manifest, skipping");
                continue;
            }

            let content = fs.read_to_string(path).map_err(|e| {
                ValidationFailure::new(format!("reading manifest {}: {e}", path.display()))
            })?;

            let before = violations.len();
            report.documents_checked += self.check_manifest(path, &content, &mut violations);
            report.manifests_checked += 1;

            if violations.len() > before {
                failed_manifests += 1;
            }
        }

        if violations.is_empty() {
            debug!(?report, "manifests passed");
            return Ok(report);
        }

        Err(ValidationFailure::with_violations(
            format!(
                "{failed_manifests} of {} manifest(s) failed validation",
                report.manifests_checked
            ),
            violations,
        ))
    }
}
