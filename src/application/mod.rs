//! Application layer - Use cases and orchestration

pub mod check_records;
pub mod init;
pub mod list_pharmacies;
pub mod load_directory;
pub mod manage_config;
pub mod show_pharmacy;

pub use check_records::{check_records, RecordReport};
pub use list_pharmacies::{list_pharmacies, ListOptions, Listing, StatusCounts};
pub use load_directory::{DataSource, Directory, DirectoryService};
pub use manage_config::ConfigService;
pub use show_pharmacy::{find_pharmacy, show_pharmacy, PharmacyDetail};
