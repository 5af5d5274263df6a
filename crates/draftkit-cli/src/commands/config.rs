//! `draftkit config`: inspect configuration values.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `explicit` is the `--config` path, if one was given.
pub fn execute(
    cmd: ConfigCommands,
    explicit: Option<PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            if output.is_json() {
                output.json(&value)?;
            } else {
                output.result(&render_value(&value))?;
            }
        }

        ConfigCommands::List => {
            if output.is_json() {
                return output.json(&config);
            }
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.result(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            let path = active_path(explicit, Path::new(LOCAL_CONFIG_FILE));
            output.result(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `detect.markers.go-module`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<Value> {
    let root = serde_json::to_value(config)?;

    key.split('.')
        .try_fold(&root, |node, segment| node.get(segment))
        .cloned()
        .ok_or_else(|| CliError::config(format!("Unknown config key: '{key}'")))
}

/// Strings print bare; everything else prints as compact JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// The file that would take precedence on the next run.
fn active_path(explicit: Option<PathBuf>, local: &Path) -> PathBuf {
    explicit
        .or_else(|| local.is_file().then(|| local.to_path_buf()))
        .unwrap_or_else(AppConfig::config_path)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        let value = get_config_value(&cfg, "output.format").unwrap();
        assert_eq!(render_value(&value), "auto");
    }

    #[test]
    fn get_nested_map_key() {
        let cfg = AppConfig::default();
        let value = get_config_value(&cfg, "detect.markers.go-module").unwrap();
        assert_eq!(render_value(&value), "go.mod");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        let value = get_config_value(&cfg, "output.no_color").unwrap();
        assert_eq!(render_value(&value), "false");
    }

    #[test]
    fn unset_language_renders_empty() {
        let cfg = AppConfig::default();
        let value = get_config_value(&cfg, "detect.language").unwrap();
        assert_eq!(render_value(&value), "");
    }

    #[test]
    fn explicit_path_wins() {
        let dir = TempDir::new().unwrap();
        let local = dir.path().join(LOCAL_CONFIG_FILE);
        std::fs::write(&local, "").unwrap();

        let explicit = PathBuf::from("ci.toml");
        assert_eq!(active_path(Some(explicit.clone()), &local), explicit);
        assert_eq!(active_path(None, &local), local);
    }

    #[test]
    fn missing_local_falls_back_to_global() {
        let dir = TempDir::new().unwrap();
        let local = dir.path().join(LOCAL_CONFIG_FILE);
        assert_eq!(active_path(None, &local), AppConfig::config_path());
    }
}
