//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod provider;
pub mod repository;

pub use config::Config;
pub use provider::{DemoProvider, FileSystemProvider, PharmacyProvider, RecordFile};
pub use repository::{DirectoryRepository, FileSystemRepository};
