//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the values built from
//! it (alias table, variant rules, signal probe).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`DRAFTKIT__DETECT__LANGUAGE=go`)
//! 3. The file passed with `--config` (must exist)
//! 4. `./.draftkit.toml`
//! 5. The global file under the platform config directory
//! 6. Built-in defaults (always present)

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use draftkit_adapters::{MarkerSignalProbe, ProfileCatalog, profile_store::DEFAULT_LOCAL_DIR};
use draftkit_core::domain::{
    AliasTable, DomainError, GO_MODULE_SIGNAL, GO_MODULE_VARIANT_SIGNAL, VariantRule,
    VariantRules,
};

/// File name of the project-local configuration.
pub const LOCAL_CONFIG_FILE: &str = ".draftkit.toml";

/// Prefix of configuration environment variables.
const ENV_PREFIX: &str = "DRAFTKIT";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Language detection and profile resolution.
    pub detect: DetectConfig,
    /// Profile discovery.
    pub profiles: ProfilesConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectConfig {
    /// Skip detection and always use this language.
    pub language: Option<String>,
    /// Extra `raw name -> identifier` entries on top of the built-in aliases.
    pub aliases: BTreeMap<String, String>,
    /// Signals declared true for every project.
    pub signals: Vec<String>,
    /// `signal -> marker file` pairs checked in the project root.
    pub markers: BTreeMap<String, String>,
    /// Specialized variant rules, tried in order.
    pub variants: Vec<VariantConfig>,
}

/// One `[[detect.variants]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantConfig {
    pub base: String,
    pub variant: String,
    pub requires: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilesConfig {
    /// Project-relative directory of local profiles.
    pub local_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; `--output-format` wins.
    pub format: String,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            language: None,
            aliases: BTreeMap::new(),
            signals: Vec::new(),
            markers: BTreeMap::from([(GO_MODULE_SIGNAL.to_owned(), "go.mod".to_owned())]),
            variants: vec![VariantConfig {
                base: "go".into(),
                variant: "gomodule".into(),
                requires: vec![GO_MODULE_SIGNAL.into(), GO_MODULE_VARIANT_SIGNAL.into()],
            }],
        }
    }
}

impl Default for ProfilesConfig {
    fn default() -> Self {
        Self {
            local_dir: PathBuf::from(DEFAULT_LOCAL_DIR),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from every layer.
    ///
    /// `config_file` is the path the user passed via `--config`; when given it
    /// must exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(Some(Self::config_path()), Path::new(LOCAL_CONFIG_FILE), config_file)
    }

    /// [`Self::load`] with explicit global and local paths.
    pub fn load_from(
        global: Option<PathBuf>,
        local: &Path,
        config_file: Option<&PathBuf>,
    ) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("failed to build default configuration")?;

        let mut builder = Config::builder().add_source(defaults);

        if let Some(global) = global {
            builder = builder.add_source(toml_file(&global).required(false));
        }
        builder = builder.add_source(toml_file(local).required(false));

        if let Some(explicit) = config_file {
            builder = builder.add_source(toml_file(explicit).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("detect.signals"),
        );

        let config = builder
            .build()
            .context("failed to read configuration")?
            .try_deserialize::<Self>()
            .context("invalid configuration")?;

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.draftkit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "draftkit", "draftkit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The trimmed language override, if one is configured.
    pub fn language_override(&self) -> Option<&str> {
        self.detect
            .language
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }

    /// Built-in aliases plus configured extras.
    pub fn alias_table(&self) -> Result<AliasTable, DomainError> {
        self.detect
            .aliases
            .iter()
            .try_fold(AliasTable::builder().with_builtin(), |builder, (raw, canonical)| {
                builder.alias(raw, canonical)
            })
            .map(|builder| builder.build())
    }

    /// Configured variant rules. An empty list disables substitution.
    pub fn variant_rules(&self) -> Result<VariantRules, DomainError> {
        self.detect
            .variants
            .iter()
            .map(|v| VariantRule::new(&v.base, &v.variant, v.requires.iter().cloned()))
            .collect::<Result<Vec<_>, _>>()
            .map(VariantRules::new)
    }

    /// Signal probe built from configured markers and declared signals.
    pub fn signal_probe(&self) -> MarkerSignalProbe {
        self.detect
            .markers
            .iter()
            .fold(MarkerSignalProbe::empty(), |probe, (signal, file)| {
                probe.with_marker(signal.as_str(), file.as_str())
            })
            .with_declared(self.detect.signals.iter().map(String::as_str))
    }

    /// Built-in profiles layered under `profiles.local_dir`.
    pub fn catalog(&self) -> ProfileCatalog {
        ProfileCatalog::new().with_local_dir(self.profiles.local_dir.clone())
    }
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}
