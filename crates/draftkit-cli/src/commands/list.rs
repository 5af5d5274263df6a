//! Implementation of the `draftkit list` command.

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use super::build_resolver;

/// Print every language with a profile under `args.dir`, built-ins and local
/// profiles together.
pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = build_resolver(&config)?;
    let profiles = service.supported_profiles(&args.dir)?;

    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Supported languages:")?;
            for profile in &profiles {
                output.print(&format!(
                    "  {:<12} {:<16} {}",
                    profile.id.as_str(),
                    profile.name,
                    profile.source
                ))?;
            }
        }

        // JSON and the bare list bypass quiet mode; both are meant for pipes.
        ListFormat::Json => output.json(&profiles)?,

        ListFormat::List => {
            for profile in &profiles {
                output.result(profile.id.as_str())?;
            }
        }
    }

    Ok(())
}
