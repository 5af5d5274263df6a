//! `draftkit detect`: resolve a project directory to a profile.

use std::path::Path;

use draftkit_core::application::ResolveService;
use draftkit_core::domain::{DetectedLanguage, ResolvedProfile};
use serde_json::json;

use crate::{
    cli::{DetectArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use super::build_resolver;

/// Resolve `args.dir` and print the identifier.
///
/// `--language` beats `detect.language` from config. With `--candidates`
/// the classifier's full ranking is shown as well.
pub fn execute(args: DetectArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = build_resolver(&config)?;

    let language = args
        .language
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .or_else(|| config.language_override());

    let (resolved, candidates) = resolve_once(&service, &args.dir, language, args.candidates)?;

    if output.is_json() {
        let mut doc = json!({
            "directory": args.dir,
            "identifier": resolved.identifier,
            "profile": resolved.profile,
        });
        if let Some(candidates) = &candidates {
            doc["candidates"] = json!(candidates);
        }
        return output.json(&doc);
    }

    output.result(resolved.identifier.as_str())?;
    print_details(&output, &resolved, candidates.as_deref())?;
    Ok(())
}

/// Resolve, classifying the directory at most once even when the ranking is
/// also wanted.
fn resolve_once(
    service: &ResolveService,
    dir: &Path,
    language: Option<&str>,
    with_candidates: bool,
) -> CliResult<(ResolvedProfile, Option<Vec<DetectedLanguage>>)> {
    match (language, with_candidates) {
        (_, false) => Ok((service.resolve(dir, language)?, None)),
        // The override path never classifies, so this is still one walk.
        (Some(_), true) => {
            let resolved = service.resolve(dir, language)?;
            Ok((resolved, Some(service.detect(dir)?)))
        }
        (None, true) => {
            let ranking = service.detect(dir)?;
            let resolved = service.resolve_detected(dir, &ranking)?;
            Ok((resolved, Some(ranking)))
        }
    }
}

fn print_details(
    output: &OutputManager,
    resolved: &ResolvedProfile,
    candidates: Option<&[DetectedLanguage]>,
) -> CliResult<()> {
    // Plain output stays a bare identifier for scripts.
    if output.format() == OutputFormat::Human {
        output.info(&format!(
            "profile: {} ({})",
            resolved.profile.name, resolved.profile.source
        ))?;
    }

    if let Some(candidates) = candidates {
        output.header("Detected languages:")?;
        if candidates.is_empty() {
            output.print("  (none)")?;
        }
        for lang in candidates {
            output.print(&format!("  {:<16} {:>6.2}%", lang.name, lang.percent))?;
        }
    }
    Ok(())
}
