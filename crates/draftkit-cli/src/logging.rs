//! Stderr logging for the `draftkit` binary.
//!
//! The core and adapter crates only emit events; this module is the one place
//! a subscriber is installed. Stdout stays reserved for command results, so
//! every log line goes to stderr regardless of `--output-format`.
//!
//! `-q` selects `error`, no flag `warn`, then `-v` / `-vv` / `-vvv` step
//! through `info`, `debug` and `trace`. A non-empty `RUST_LOG` replaces the
//! whole mapping.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the level the flags select.
const WORKSPACE_TARGETS: [&str; 3] = ["draftkit", "draftkit_core", "draftkit_adapters"];

/// Install the stderr subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter(args))
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn env_filter(args: &GlobalArgs) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(verbosity_level(args))))
}

/// `target=level` for each workspace crate; third-party crates stay off.
fn filter_directives(level: &str) -> String {
    WORKSPACE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// `--quiet` wins over any number of `-v`.
fn verbosity_level(args: &GlobalArgs) -> &'static str {
    match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}
