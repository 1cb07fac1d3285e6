//! Configuration for ExamMaker

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Project-local config file name
const LOCAL_CONFIG: &str = ".exammaker.yml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding item YAML files
    pub items_dir: PathBuf,

    /// Editor command line, overriding editor discovery
    pub editor: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: Option<String>,
}

fn default_items_dir() -> PathBuf {
    PathBuf::from(crate::DEFAULT_ITEMS_DIR)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items_dir: default_items_dir(),
            editor: None,
            log_level: None,
        }
    }
}

impl Config {
    /// Load config with fallback chain
    ///
    /// An explicit path must load. Otherwise `./.exammaker.yml`, then
    /// `<config dir>/exammaker/exammaker.yml`, then defaults; unreadable
    /// files in the fallback locations are skipped with a warning.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let default_paths = [
            Some(PathBuf::from(LOCAL_CONFIG)),
            dirs::config_dir().map(|p| p.join("exammaker").join("exammaker.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                match Self::load_from_file(path) {
                    Ok(config) => return Ok(config),
                    Err(e) => warn!("Failed to load config from {}: {:#}", path.display(), e),
                }
            }
        }

        Ok(Self::default())
    }

    /// Load config from a specific YAML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
