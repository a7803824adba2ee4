//! Initialize directory use case

use crate::domain::Language;
use crate::error::Result;
use crate::infrastructure::provider::DEMO_RECORD;
use crate::infrastructure::{Config, DirectoryRepository, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Initialize a new pharmacy directory at the specified path.
///
/// With `with_demo`, the sample record is written into the data directory.
pub fn init(path: &Path, language: Language, with_demo: bool) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::new(language);
    repo.save_config(&config)?;

    let data_dir = repo.data_dir(&config);
    fs::create_dir_all(&data_dir)?;
    if with_demo {
        fs::write(data_dir.join("demo.toml"), DEMO_RECORD)?;
    }

    println!("Initialized pharmadir directory at {}", path.display());
    println!("Records: {}", data_dir.display());

    Ok(())
}
