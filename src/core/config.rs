use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::debug;

pub const APP_NAME: &str = "gousdbrl";
pub const STATE_FILE_NAME: &str = "data.json";
const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SourceConfig {
    #[serde(default = "SourceConfig::default_url")]
    pub url: String,
    #[serde(default = "SourceConfig::default_selector")]
    pub selector: String,
    /// Label shown in the banner
    #[serde(default = "SourceConfig::default_name")]
    pub name: String,
    #[serde(default = "SourceConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl SourceConfig {
    fn default_url() -> String {
        "https://wise.com/gb/currency-converter/usd-to-brl-rate?amount=1".to_string()
    }

    fn default_selector() -> String {
        "span[dir='ltr'] span.text-success".to_string()
    }

    fn default_name() -> String {
        "Wise".to_string()
    }

    fn default_timeout_secs() -> u64 {
        30
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            url: Self::default_url(),
            selector: Self::default_selector(),
            name: Self::default_name(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,
    /// Directory holding `data.json`; defaults to the per-user config directory
    pub data_dir: Option<String>,
}

impl AppConfig {
    /// Loads the default config file, falling back to built-in defaults when it is absent.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::app_config_dir()?.join(CONFIG_FILE_NAME))
    }

    pub fn app_config_dir() -> Result<PathBuf> {
        let base_dirs = BaseDirs::new().context("Could not determine user config directory")?;
        Ok(base_dirs.config_dir().join(APP_NAME))
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.data_dir {
            return Ok(PathBuf::from(custom_path));
        }
        Self::app_config_dir()
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
