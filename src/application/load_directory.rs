//! Load the pharmacy directory, falling back to demo records

use crate::domain::Pharmacy;
use crate::error::Result;
use crate::infrastructure::{
    Config, DemoProvider, FileSystemProvider, FileSystemRepository, PharmacyProvider,
};
use tracing::{info, warn};

/// Where the loaded records came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Live,
    /// Demo records served instead; `reason` holds the provider error, if any
    Demo { reason: Option<String> },
}

impl DataSource {
    pub fn is_demo(&self) -> bool {
        matches!(self, DataSource::Demo { .. })
    }
}

/// Loaded records together with their provenance
#[derive(Debug, Clone)]
pub struct Directory {
    pub pharmacies: Vec<Pharmacy>,
    pub source: DataSource,
}

impl Directory {
    pub fn live(pharmacies: Vec<Pharmacy>) -> Self {
        Directory {
            pharmacies,
            source: DataSource::Live,
        }
    }
}

/// Service for loading the directory from a provider
pub struct DirectoryService {
    provider: Box<dyn PharmacyProvider>,
    fallback: Option<Box<dyn PharmacyProvider>>,
}

impl DirectoryService {
    pub fn new(provider: Box<dyn PharmacyProvider>) -> Self {
        DirectoryService {
            provider,
            fallback: None,
        }
    }

    /// Serve `fallback` when the provider fails or has no records
    pub fn with_fallback(mut self, fallback: Box<dyn PharmacyProvider>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Wire the file system provider and, if enabled, the demo fallback
    pub fn from_config(repository: &FileSystemRepository, config: &Config) -> Self {
        let service = DirectoryService::new(Box::new(FileSystemProvider::new(
            repository.data_dir(config),
        )));
        if config.demo_fallback {
            service.with_fallback(Box::new(DemoProvider))
        } else {
            service
        }
    }

    pub fn load(&self) -> Result<Directory> {
        let fetched = self.provider.fetch();

        let Some(fallback) = &self.fallback else {
            return fetched.map(Directory::live);
        };

        let reason = match fetched {
            Ok(pharmacies) if !pharmacies.is_empty() => return Ok(Directory::live(pharmacies)),
            Ok(_) => {
                info!(source = %self.provider.name(), "no pharmacies found, using {}", fallback.name());
                None
            }
            Err(e) => {
                warn!(source = %self.provider.name(), error = %e, "falling back to {}", fallback.name());
                Some(e.to_string())
            }
        };

        Ok(Directory {
            pharmacies: fallback.fetch()?,
            source: DataSource::Demo { reason },
        })
    }
}
