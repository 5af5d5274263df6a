//! Validation Service - manifest validation orchestrator.
//!
//! Linear three-stage pipeline with no retries and no persisted state:
//! 1. Classify the path (file or directory)
//! 2. Locate manifests (directories only)
//! 3. Hand the set to the rule engine

use std::path::Path;

use tracing::{debug, error, instrument};

use crate::{
    application::{
        ApplicationError,
        context::ValidationContext,
        ports::{Filesystem, RuleEngine},
        services::manifest_locator::locate_manifests,
    },
    domain::{ManifestSet, PathKind, ValidationReport},
    error::DraftResult,
};

/// Manifest validation service.
pub struct ValidationService {
    filesystem: Box<dyn Filesystem>,
    engine: Box<dyn RuleEngine>,
}

impl ValidationService {
    pub fn new(filesystem: Box<dyn Filesystem>, engine: Box<dyn RuleEngine>) -> Self {
        Self { filesystem, engine }
    }

    /// Validate the manifest file, or every file under the manifest directory.
    pub fn run(&self, manifest_path: impl AsRef<Path>) -> DraftResult<ValidationReport> {
        self.run_with_context(&ValidationContext::background(), manifest_path)
    }

    /// As [`Self::run`], with a caller-controlled context for cancellation.
    ///
    /// The walk itself is not cancellable; the context only reaches the rule
    /// engine.
    #[instrument(skip_all, fields(manifest_path = %manifest_path.as_ref().display()))]
    pub fn run_with_context(
        &self,
        ctx: &ValidationContext,
        manifest_path: impl AsRef<Path>,
    ) -> DraftResult<ValidationReport> {
        let manifest_path = manifest_path.as_ref();

        if manifest_path.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput {
                message: "path to the manifests cannot be empty".into(),
            }
            .into());
        }

        let manifests = self.collect(manifest_path)?;

        debug!(count = manifests.len(), "validating manifests");
        self.engine
            .validate_manifests(ctx, self.filesystem.as_ref(), &manifests)
            .map_err(|failure| {
                error!("validating manifests: {failure}");
                ApplicationError::ValidationFailed(failure).into()
            })
    }

    /// Classify and, for directories, walk.
    fn collect(&self, manifest_path: &Path) -> DraftResult<ManifestSet> {
        let kind = self.filesystem.classify(manifest_path).map_err(|e| {
            ApplicationError::path_error("determine if path is a directory", manifest_path, e)
        })?;

        match kind {
            PathKind::Directory => locate_manifests(self.filesystem.as_ref(), manifest_path),
            PathKind::File => Ok(ManifestSet::single(manifest_path)),
        }
    }
}
