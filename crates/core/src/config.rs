//! Application configuration.
//!
//! Settings resolve in precedence order: built-in defaults, then
//! `<config-dir>/giftbook/config.toml`, then `GIFTBOOK_*` environment
//! variables.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Directory name under the user's config dir.
pub const CONFIG_DIR: &str = "giftbook";

const DEFAULT_CONFIG: &str = r#"# Giftbook configuration.
#
# Path to the catalog data file, one record per line:
#   <4-char season mask>;<item name>;V(<loved-by CSV>);K(<liked-by CSV>)
# Relative paths resolve against the working directory.
#data_path = "data.txt"
"#;

/// Runtime settings for the tracker.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Catalog data file to load at startup.
    pub data_path: PathBuf,
}

impl AppConfig {
    /// Load settings from the default config file location.
    pub fn load() -> Result<Self> {
        Self::load_from(config_file_path())
    }

    fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let settings = Config::builder()
            .set_default("data_path", "data.txt")?
            .add_source(File::from(path.as_ref()).required(false))
            .add_source(Environment::with_prefix("GIFTBOOK"))
            .build()
            .context("failed to assemble configuration")?;
        settings
            .try_deserialize()
            .context("failed to deserialize configuration")
    }
}

/// Location of the config file.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join("config.toml")
}

/// Write a commented default config file if none exists yet.
pub fn ensure_default_config() -> Result<PathBuf> {
    ensure_default_config_at(config_file_path())
}

fn ensure_default_config_at(path: PathBuf) -> Result<PathBuf> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&path, DEFAULT_CONFIG)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_apply_without_a_config_file() -> Result<()> {
        let dir = tempdir()?;
        let config = AppConfig::load_from(dir.path().join("missing.toml"))?;
        assert_eq!(config.data_path, PathBuf::from("data.txt"));
        Ok(())
    }

    #[test]
    fn config_file_overrides_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "data_path = \"catalog/items.txt\"\n")?;

        let config = AppConfig::load_from(&path)?;
        assert_eq!(config.data_path, PathBuf::from("catalog/items.txt"));
        Ok(())
    }

    #[test]
    fn ensure_writes_the_default_file_once() -> Result<()> {
        let dir = tempdir()?;
        let target = dir.path().join("nested").join("config.toml");

        let written = ensure_default_config_at(target.clone())?;
        assert!(written.exists());
        let first = fs::read_to_string(&written)?;

        fs::write(&written, "data_path = \"kept.txt\"\n")?;
        ensure_default_config_at(target)?;
        let second = fs::read_to_string(&written)?;
        assert_ne!(first, second, "existing files are never overwritten");
        Ok(())
    }
}
