use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::types::SavageLevel;

/// Resolved user options threaded into the roast pipeline. The core
/// never reads configuration itself; it gets these as call arguments.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RoastConfig {
    pub enabled: bool,
    pub level: SavageLevel,
    pub decorations: bool,
}

impl Default for RoastConfig {
    fn default() -> Self {
        Self { enabled: true, level: SavageLevel::Savage, decorations: true }
    }
}

impl RoastConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let cfg: RoastConfig = toml::from_str(&txt)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(cfg)
    }

    /// Load `path` when it exists; otherwise defaults. A broken file
    /// warns and falls back rather than killing the run.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        if let Some(p) = path {
            if p.exists() {
                match Self::from_toml_file(p) {
                    Ok(cfg) => return cfg,
                    Err(e) => eprintln!("(warn) {}; using default config", e),
                }
            }
        }
        Self::default()
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~\Users\you\.roastlint\config.toml on Windows; ~/.roastlint/config.toml elsewhere
    dirs_next::home_dir().map(|h| h.join(".roastlint").join("config.toml"))
}

/// User-supplied catalog override, next to the config file.
pub fn default_catalog_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".roastlint").join("catalog.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}
