//! Command handlers, one module per subcommand.

use draftkit_adapters::ExtensionClassifier;
use draftkit_core::application::ResolveService;

use crate::config::AppConfig;
use crate::error::{CliResult, IntoCli};

pub mod completions;
pub mod config;
pub mod detect;
pub mod init;
pub mod list;
pub mod validate;

/// Wire a [`ResolveService`] to the real adapters using `config`.
///
/// Invalid aliases or variant rules surface here as configuration errors.
pub(crate) fn build_resolver(config: &AppConfig) -> CliResult<ResolveService> {
    let aliases = config
        .alias_table()
        .with_cli_context(|| "invalid entry in [detect.aliases]")?;
    let variants = config
        .variant_rules()
        .with_cli_context(|| "invalid entry in [[detect.variants]]")?;

    Ok(ResolveService::new(
        Box::new(ExtensionClassifier::new()),
        Box::new(config.catalog()),
        Box::new(config.signal_probe()),
    )
    .with_aliases(aliases)
    .with_variants(variants))
}
