//! Optional user configuration.
//!
//! Read from `$PROMPTBOX_CONFIG` when set, otherwise from
//! `<config_dir>/promptbox/config.toml`. A missing file is not an error.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "PROMPTBOX_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Dataset file to use instead of the built-in prompt set.
    pub dataset: Option<PathBuf>,
    /// Where browse mode writes its log output.
    pub log_file: Option<PathBuf>,
    /// Capture mouse wheel events in browse mode.
    pub mouse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: None,
            log_file: None,
            mouse: true,
        }
    }
}

impl Config {
    /// Resolve the config path and load it, falling back to defaults.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("promptbox").join("config.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// CLI flag wins over the config file.
    pub fn dataset_path<'a>(&'a self, cli_override: Option<&'a Path>) -> Option<&'a Path> {
        cli_override.or(self.dataset.as_deref())
    }
}
