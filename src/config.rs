//! Application configuration and data-directory resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PacklightError, Result};

/// Environment variable overriding the data directory, mostly used by tests.
pub const ROOT_ENV: &str = "PACKLIGHT_ROOT";

/// Settings loaded from `config.toml` under the data directory. Unknown keys
/// are ignored; a missing file yields the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How many archived results to keep, newest first.
    pub history_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { history_limit: 50 }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|err| PacklightError::Config(format!("parse {}: {err}", path.display())))
    }
}

/// Resolve the data directory: explicit flag, then `PACKLIGHT_ROOT`, then
/// the platform data dir, then `.packlight` in the working directory.
#[must_use]
pub fn resolve_root(flag: Option<&Path>) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    if let Ok(dir) = std::env::var(ROOT_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    dirs::data_dir()
        .map(|dir| dir.join("packlight"))
        .unwrap_or_else(|| PathBuf::from(".packlight"))
}
