//! Flags accepted by every `draftkit` subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so `draftkit detect -vv`
//! and `draftkit -vv detect` mean the same thing.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Raise the log level on stderr.
    ///
    /// Logs never touch stdout, so `draftkit detect -vv` still prints only
    /// the identifier there.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity on stderr:
    (none)  - Warnings and errors
    -v      - Info level (detected languages, skipped candidates, chosen profile)
    -vv     - Debug level (classifier ranking, probed signals, manifests)
    -vvv    - Trace level (every walked entry)
RUST_LOG, when set, replaces this mapping entirely."
    )]
    pub verbose: u8,

    /// Only errors reach the terminal. The command's answer (the detected
    /// identifier, a config value) is still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Same effect as `output.no_color = true`. Also read from `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Extra TOML file layered above `./.draftkit.toml`; it must exist.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Additional configuration file (highest file priority)"
    )]
    pub config: Option<PathBuf>,

    /// Rendering of command results on stdout.
    ///
    /// `auto` defers to `output.format` from config and, failing that, picks
    /// `human` on a terminal and `plain` when piped.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format",
        long_help = "How results are written to stdout:
    auto   - Use output.format from config; otherwise human on a TTY, plain when piped
    human  - Identifier plus profile details, colored
    plain  - Bare values, one per line, for scripts
    json   - A single pretty-printed JSON document
An explicit value here always beats output.format."
    )]
    pub output_format: OutputFormat,
}

/// Stdout rendering selected by `--output-format` or `output.format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Decide from config, then from whether stdout is a terminal.
    #[default]
    Auto,
    /// Identifier plus profile details.
    Human,
    /// Bare values only.
    Plain,
    /// One JSON document.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::{CommandFactory, Parser};

    #[test]
    fn output_format_accepted_after_subcommand() {
        let cli = Cli::try_parse_from(["draftkit", "detect", "--output-format", "json"]).unwrap();
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }

    #[test]
    fn output_format_defaults_to_auto() {
        let cli = Cli::try_parse_from(["draftkit", "list"]).unwrap();
        assert_eq!(cli.global.output_format, OutputFormat::Auto);
        assert_eq!(cli.global.verbose, 0);
    }

    #[test]
    fn verbose_counts_repeats() {
        let cli = Cli::try_parse_from(["draftkit", "-vv", "detect", "-v"]).unwrap();
        assert_eq!(cli.global.verbose, 3);
    }

    #[test]
    fn long_help_explains_config_interplay() {
        let mut cmd = Cli::command();
        let help = cmd.render_long_help().to_string();
        assert!(help.contains("output.format"));
        assert!(help.contains("RUST_LOG"));
    }
}
