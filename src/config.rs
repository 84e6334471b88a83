// Configuration loading (YAML)

use crate::filter::Tab;
use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR: &str = "checklist";
const CONFIG_FILE: &str = "checklist.yml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Start with the sample checklists on the dashboard
    pub samples: bool,
    /// Cosmetic pause before sign-in completes
    pub auth_delay_ms: u64,
    pub color: bool,
    pub default_tab: Tab,
    /// Used when no `-v` flag is given
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            samples: true,
            auth_delay_ms: 0,
            color: true,
            default_tab: Tab::All,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load from an explicit path, the user config dir, or fall back to defaults
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(eyre!("Config file not found: {}", path.display()));
            }
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config YAML {}", path.display()))?;

        debug!(path = ?path, "Loaded config");
        Ok(config)
    }

    /// `<config dir>/checklist/checklist.yml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.samples);
        assert_eq!(config.auth_delay_ms, 0);
        assert_eq!(config.default_tab, Tab::All);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_partial_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("checklist.yml");
        fs::write(&path, "samples: false\ndefault_tab: open\nauth_delay_ms: 250\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert!(!config.samples);
        assert_eq!(config.default_tab, Tab::Open);
        assert_eq!(config.auth_delay_ms, 250);
        assert!(config.color);
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.yml");
        assert!(Config::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("checklist.yml");
        fs::write(&path, "default_tab: archived\n").unwrap();
        assert!(Config::from_file(&path).is_err());
    }
}
