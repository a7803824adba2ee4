//! Config management use case

use crate::domain::{Coordinates, Language};
use crate::error::{PharmadirError, Result};
use crate::infrastructure::{Config, DirectoryRepository, FileSystemRepository};
use std::str::FromStr;

const VALID_KEYS: &str = "language, data_dir, demo_fallback, location";

/// Service for managing directory configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "language" => Ok(format!("{:?}", config.language).to_lowercase()),
            "data_dir" => Ok(config.data_dir),
            "demo_fallback" => Ok(config.demo_fallback.to_string()),
            "location" => Ok(config
                .location
                .map(|location| location.to_string())
                .unwrap_or_else(|| "none".to_string())),
            _ => Err(PharmadirError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "language" => {
                config.language = Language::from_str(value).map_err(PharmadirError::Config)?;
            }
            "data_dir" => {
                if value.trim().is_empty() {
                    return Err(PharmadirError::Config(
                        "data_dir cannot be empty".to_string(),
                    ));
                }
                config.data_dir = value.trim().to_string();
            }
            "demo_fallback" => {
                config.demo_fallback = value.parse().map_err(|_| {
                    PharmadirError::Config(format!(
                        "Invalid demo_fallback: '{}'. Expected true or false",
                        value
                    ))
                })?;
            }
            "location" => {
                config.location = if value.eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(Coordinates::from_str(value).map_err(PharmadirError::Config)?)
                };
            }
            _ => {
                return Err(PharmadirError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
