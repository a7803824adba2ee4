//! Configuration management

use crate::domain::{Coordinates, Language};
use crate::error::{PharmadirError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_DIR: &str = ".pharmadir";
const CONFIG_FILE: &str = "config.toml";

fn default_data_dir() -> String {
    "pharmacies".to_string()
}

fn default_demo_fallback() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub language: Language,
    /// Directory holding one TOML record per pharmacy, relative to the root
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Serve the built-in demo records when no live data is available
    #[serde(default = "default_demo_fallback")]
    pub demo_fallback: bool,
    /// Where distances are measured from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinates>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(language: Language) -> Self {
        Config {
            language,
            data_dir: default_data_dir(),
            demo_fallback: default_demo_fallback(),
            location: None,
        }
    }

    /// Load config from .pharmadir/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PharmadirError::NotPharmadirDirectory(path.to_path_buf())
            } else {
                PharmadirError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| PharmadirError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .pharmadir/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(CONFIG_DIR);
        let config_path = config_dir.join(CONFIG_FILE);

        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| PharmadirError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the display language, letting PHARMADIR_LANG override the file
    pub fn get_language(&self) -> Language {
        std::env::var("PHARMADIR_LANG")
            .ok()
            .and_then(|value| Language::from_str(&value).ok())
            .unwrap_or(self.language)
    }
}
