//! Pharmacy data providers

use crate::domain::Pharmacy;
use crate::error::{PharmadirError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Sample record served when no live data is available
pub const DEMO_RECORD: &str = include_str!("demo.toml");

/// Source of pharmacy records
pub trait PharmacyProvider {
    /// Short description for logs and banners
    fn name(&self) -> String;

    /// Fetch every active pharmacy
    fn fetch(&self) -> Result<Vec<Pharmacy>>;
}

/// Outcome of reading one record file
#[derive(Debug)]
pub struct RecordFile {
    pub path: PathBuf,
    pub record: Result<Pharmacy>,
}

/// Reads one TOML record per pharmacy from a directory tree
#[derive(Debug, Clone)]
pub struct FileSystemProvider {
    data_dir: PathBuf,
}

impl FileSystemProvider {
    pub fn new(data_dir: PathBuf) -> Self {
        FileSystemProvider { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// All `*.toml` files below the data directory, hidden entries skipped
    pub fn record_paths(&self) -> Result<Vec<PathBuf>> {
        if !self.data_dir.is_dir() {
            return Err(PharmadirError::Config(format!(
                "Data directory not found: {}",
                self.data_dir.display()
            )));
        }

        let walker = WalkDir::new(&self.data_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || entry
                        .file_name()
                        .to_str()
                        .is_none_or(|name| !name.starts_with('.'))
            });

        let mut paths = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| PharmadirError::Config(e.to_string()))?;
            if entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "toml")
            {
                paths.push(entry.into_path());
            }
        }
        Ok(paths)
    }

    /// Parse a single record, attributing any failure to its file
    pub fn read_record(path: &Path) -> Result<Pharmacy> {
        let contents = fs::read_to_string(path)?;
        Pharmacy::from_toml(&contents).map_err(|e| PharmadirError::InvalidRecord {
            path: path.to_path_buf(),
            message: match e {
                PharmadirError::TomlDeserialize(inner) => inner.message().to_string(),
                other => other.to_string(),
            },
        })
    }

    /// Read every record file, keeping failures alongside successes
    pub fn read_all(&self) -> Result<Vec<RecordFile>> {
        Ok(self
            .record_paths()?
            .into_iter()
            .map(|path| {
                let record = Self::read_record(&path);
                RecordFile { path, record }
            })
            .collect())
    }
}

impl PharmacyProvider for FileSystemProvider {
    fn name(&self) -> String {
        format!("records in {}", self.data_dir.display())
    }

    fn fetch(&self) -> Result<Vec<Pharmacy>> {
        let mut pharmacies = Vec::new();

        for file in self.read_all()? {
            match file.record {
                Ok(pharmacy) if pharmacy.is_active => pharmacies.push(pharmacy),
                Ok(pharmacy) => debug!(id = %pharmacy.id, "skipping inactive pharmacy"),
                Err(e) => warn!(path = %file.path.display(), error = %e, "skipping invalid record"),
            }
        }

        info!(count = pharmacies.len(), source = %self.name(), "loaded pharmacies");
        Ok(pharmacies)
    }
}

/// The built-in demo records
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoProvider;

impl PharmacyProvider for DemoProvider {
    fn name(&self) -> String {
        "demo records".to_string()
    }

    fn fetch(&self) -> Result<Vec<Pharmacy>> {
        Ok(vec![Pharmacy::from_toml(DEMO_RECORD)?])
    }
}
