//! `draftkit validate`: check deployment manifests against the built-in rules.

use std::path::Path;

use draftkit_adapters::{LocalFilesystem, ManifestRuleEngine};
use draftkit_core::application::ValidationService;
use serde_json::json;
use tracing::info;

use crate::{cli::ValidateArgs, error::CliResult, output::OutputManager};

/// Validate a manifest file or directory.
///
/// Prints nothing on success unless JSON output was requested; a rejection
/// becomes a [`crate::error::CliError::Core`] carrying the engine's findings.
pub fn execute(args: ValidateArgs, output: OutputManager) -> CliResult<()> {
    let service = ValidationService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ManifestRuleEngine::new()),
    );

    let manifest = Path::new(&args.manifest);

    match service.run(manifest) {
        Ok(report) => {
            info!(
                manifests = report.manifests_checked,
                documents = report.documents_checked,
                "manifests passed validation"
            );
            if output.is_json() {
                output.json(&json!({
                    "manifest": manifest,
                    "valid": true,
                    "report": report,
                }))?;
            }
            Ok(())
        }
        Err(err) => {
            if output.is_json() {
                if let Some(failure) = err.as_validation_failure() {
                    output.json(&json!({
                        "manifest": manifest,
                        "valid": false,
                        "failure": failure,
                    }))?;
                }
            }
            Err(err.into())
        }
    }
}
