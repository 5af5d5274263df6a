//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "draftkit",
    bin_name = "draftkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Detect project languages and validate deployment manifests",
    long_about = "draftkit resolves a project directory to a scaffolding profile \
                  and validates deployment manifests against best-practice rules.",
    after_help = "EXAMPLES:\n\
        \x20 draftkit detect ./my-service\n\
        \x20 draftkit detect --language python\n\
        \x20 draftkit validate -m ./manifests\n\
        \x20 draftkit completions bash > /usr/share/bash-completion/completions/draftkit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate deployment manifests.
    #[command(
        about = "Validate deployment manifests against best-practice rules",
        after_help = "EXAMPLES:\n\
            \x20 draftkit validate -m deploy/app.yaml\n\
            \x20 draftkit validate --manifest ./manifests"
    )]
    Validate(ValidateArgs),

    /// Detect the project language and resolve its profile.
    #[command(
        visible_alias = "d",
        about = "Detect the project language and resolve its profile",
        after_help = "EXAMPLES:\n\
            \x20 draftkit detect\n\
            \x20 draftkit detect ./service --candidates\n\
            \x20 draftkit detect --language gomodule --output-format json"
    )]
    Detect(DetectArgs),

    /// List languages with installable profiles.
    #[command(
        visible_alias = "ls",
        about = "List languages with installable profiles",
        after_help = "EXAMPLES:\n\
            \x20 draftkit list\n\
            \x20 draftkit list ./service --format json"
    )]
    List(ListArgs),

    /// Initialise a draftkit configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 draftkit init           # global config\n\
            \x20 draftkit init --local   # .draftkit.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 draftkit completions bash > ~/.local/share/bash-completion/completions/draftkit\n\
            \x20 draftkit completions zsh  > ~/.zfunc/_draftkit\n\
            \x20 draftkit completions fish > ~/.config/fish/completions/draftkit.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the draftkit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 draftkit config get detect.language\n\
            \x20 draftkit config list\n\
            \x20 draftkit config path"
    )]
    Config(ConfigCommands),
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `draftkit validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// A manifest file, or a directory whose files are all validated.
    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "PATH",
        help = "Manifest file or directory to validate"
    )]
    pub manifest: String,
}

// ── detect ────────────────────────────────────────────────────────────────────

/// Arguments for `draftkit detect`.
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Project directory.
    #[arg(value_name = "DIR", default_value = ".", help = "Project directory")]
    pub dir: PathBuf,

    /// Skip detection and use this language's profile.
    #[arg(
        short = 'l',
        long = "language",
        value_name = "ID",
        help = "Use this language instead of detecting one"
    )]
    pub language: Option<String>,

    /// Also show every detected language with its share of the source.
    #[arg(long = "candidates", help = "Show all detected languages")]
    pub candidates: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `draftkit list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Project root whose local profiles are included.
    #[arg(value_name = "DIR", default_value = ".", help = "Project directory")]
    pub dir: PathBuf,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One identifier per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `draftkit init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location (the default).
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Write to `.draftkit.toml` in the current directory.
    #[arg(
        long = "local",
        conflicts_with = "global",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `draftkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `draftkit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `detect.language`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
