//! User configuration.
//!
//! Settings live in `config.json` inside [`get_config_directory`]. Every field
//! is optional in the file. A legacy `diffrc` next to it, holding a single
//! viewer template line such as `kdiff3 %s %s`, overrides `diff_viewer`.

use crate::core::diff::{DiffViewer, DEFAULT_DIFF_VIEWER};
use crate::core::dirs::{get_config_directory, get_scratch_directory};
use crate::core::error::{GitMenuError, Result};
use crate::core::locator::DEFAULT_CACHE_TTL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "config.json";
const DIFFRC_FILE: &str = "diffrc";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Viewer template with two `%s` slots
    pub diff_viewer: String,
    /// Lifetime of cached work tree resolutions
    pub cache_ttl_secs: u64,
    pub git_program: String,
    /// Where revision blobs are written for comparison (system temp dir if unset)
    pub scratch_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            diff_viewer: DEFAULT_DIFF_VIEWER.to_string(),
            cache_ttl_secs: DEFAULT_CACHE_TTL.as_secs(),
            git_program: "git".to_string(),
            scratch_dir: None,
        }
    }
}

impl Config {
    /// Load from the user config directory, falling back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_directory())
    }

    pub fn load_from(dir: &Path) -> Result<Self> {
        let config_file = dir.join(CONFIG_FILE);
        let mut config = if config_file.exists() {
            let content = std::fs::read_to_string(&config_file)
                .map_err(|e| GitMenuError::config_read_failed(&config_file, e))?;
            serde_json::from_str(&content)
                .map_err(|e| GitMenuError::config_parse_failed(&config_file, e))?
        } else {
            Config::default()
        };

        let diffrc = dir.join(DIFFRC_FILE);
        if diffrc.exists() {
            let content = std::fs::read_to_string(&diffrc)
                .map_err(|e| GitMenuError::config_read_failed(&diffrc, e))?;
            if let Some(template) = content.lines().map(str::trim).find(|line| !line.is_empty()) {
                log::debug!("Using diff viewer from {}", diffrc.display());
                config.diff_viewer = template.to_string();
            }
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        self.save_to(&get_config_directory())
    }

    /// Write `config.json` into `dir`, returning the file path
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir).map_err(|e| GitMenuError::config_write_failed(dir, e))?;

        let config_file = dir.join(CONFIG_FILE);
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_file, content)
            .map_err(|e| GitMenuError::config_write_failed(&config_file, e))?;

        Ok(config_file)
    }

    pub fn diff_viewer(&self) -> Result<DiffViewer> {
        DiffViewer::parse(&self.diff_viewer)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn scratch_dir(&self) -> PathBuf {
        self.scratch_dir.clone().unwrap_or_else(get_scratch_directory)
    }
}
