//! This module handles the initial setup of the application.
use super::args::AppArgs;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the collections directory.
pub const COLLECTIONS_DIR_ENV: &str = "SIGNALS_COLLECTIONS_DIR";

const DEFAULT_COLLECTIONS_DIR: &str = "collections";

/// Optional settings read from the `--config` file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub collections_dir: Option<PathBuf>,
}

impl FileConfig {
    /// Loads a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Config file '{}' is not valid", path.display()))
    }
}

/// Everything the flows need, resolved from flags, environment and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub collections_dir: PathBuf,
}

impl Settings {
    /// Resolves the settings.
    ///
    /// The collections directory comes from, in order: `--collections-dir`,
    /// `SIGNALS_COLLECTIONS_DIR`, the config file, then `./collections`.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file was given but cannot be loaded.
    pub fn resolve(args: &AppArgs, env_dir: Option<String>) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let collections_dir = args
            .collections_dir
            .clone()
            .or_else(|| env_dir.filter(|dir| !dir.is_empty()).map(PathBuf::from))
            .or(file.collections_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_COLLECTIONS_DIR));

        Ok(Self { collections_dir })
    }
}

/// Prepares the application for running: configures logging and resolves the
/// settings.
///
/// # Errors
///
/// This function will return an error if the settings cannot be resolved.
pub fn prepare(args: &AppArgs) -> Result<Settings> {
    configure_logging(args.verbose);

    let settings = Settings::resolve(args, std::env::var(COLLECTIONS_DIR_ENV).ok())?;
    debug!(
        "Using collections directory {}",
        settings.collections_dir.display()
    );
    Ok(settings)
}

/// Configures logging for the application.
///
/// Logs go to stderr so they never mix with prompts. `RUST_LOG` takes
/// precedence over `--verbose`.
fn configure_logging(verbose: bool) {
    let default_filter = if verbose { "info,signals=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_dir() {
        let settings = Settings::resolve(&AppArgs::default(), None).unwrap();
        assert_eq!(settings.collections_dir, PathBuf::from("collections"));
    }

    #[test]
    fn test_precedence() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("signals.json");
        std::fs::write(&config, r#"{ "collections_dir": "/from/config" }"#).unwrap();

        let mut args = AppArgs {
            config: Some(config),
            ..AppArgs::default()
        };
        let settings = Settings::resolve(&args, None).unwrap();
        assert_eq!(settings.collections_dir, PathBuf::from("/from/config"));

        let settings = Settings::resolve(&args, Some("/from/env".to_string())).unwrap();
        assert_eq!(settings.collections_dir, PathBuf::from("/from/env"));

        args.collections_dir = Some(PathBuf::from("/from/flag"));
        let settings = Settings::resolve(&args, Some("/from/env".to_string())).unwrap();
        assert_eq!(settings.collections_dir, PathBuf::from("/from/flag"));
    }

    #[test]
    fn test_bad_config() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("signals.json");
        std::fs::write(&config, r#"{ "collection_dir": "typo" }"#).unwrap();

        let args = AppArgs {
            config: Some(config),
            ..AppArgs::default()
        };
        assert!(Settings::resolve(&args, None).is_err());

        let args = AppArgs {
            config: Some(temp.path().join("missing.json")),
            ..AppArgs::default()
        };
        assert!(Settings::resolve(&args, None).is_err());
    }
}
