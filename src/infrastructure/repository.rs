//! File system repository

use crate::error::{PharmadirError, Result};
use crate::infrastructure::config::CONFIG_DIR;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for directory operations
pub trait DirectoryRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .pharmadir/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .pharmadir/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .pharmadir directory exists
    fn is_initialized(&self) -> bool;

    /// Create .pharmadir directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of DirectoryRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the root by walking up from the current directory.
    /// PHARMADIR_ROOT takes precedence when set.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("PHARMADIR_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_config_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(PharmadirError::Config(format!(
                    "PHARMADIR_ROOT is set to '{}' but no .pharmadir directory found. \
                    Run 'pharmadir init' in that directory or unset PHARMADIR_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(PharmadirError::NotPharmadirDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_config_dir(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir()
    }

    /// Absolute location of the record directory named in the config
    pub fn data_dir(&self, config: &Config) -> PathBuf {
        self.root.join(&config.data_dir)
    }
}

impl DirectoryRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_config_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let config_dir = self.root.join(CONFIG_DIR);

        if config_dir.exists() {
            return Err(PharmadirError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&config_dir)?;
        Ok(())
    }
}
