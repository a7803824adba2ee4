//! Error types for pharmadir

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pharmadir application
#[derive(Debug, Error)]
pub enum PharmadirError {
    #[error("Not a pharmadir directory: {0}")]
    NotPharmadirDirectory(PathBuf),

    #[error("Invalid schedule format: {0}")]
    InvalidScheduleFormat(String),

    #[error("Invalid instant: {0}")]
    InvalidInstant(String),

    #[error("Pharmacy not found: {0}")]
    PharmacyNotFound(String),

    #[error("Invalid record {}: {message}", .path.display())]
    InvalidRecord { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl PharmadirError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PharmadirError::NotPharmadirDirectory(_) => 2,
            PharmadirError::InvalidInstant(_) => 3,
            PharmadirError::PharmacyNotFound(_) => 4,
            PharmadirError::InvalidScheduleFormat(_) | PharmadirError::InvalidRecord { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PharmadirError::NotPharmadirDirectory(path) => {
                format!(
                    "Not a pharmadir directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'pharmadir init' in this directory to create a new directory\n\
                    • Navigate to an existing pharmadir directory\n\
                    • Set PHARMADIR_ROOT environment variable to your directory path",
                    path.display()
                )
            }
            PharmadirError::InvalidInstant(input) => {
                format!(
                    "Invalid instant: '{}'\n\n\
                    Expected format: YYYY-MM-DD HH:MM (24-hour clock)\n\n\
                    Examples:\n\
                    pharmadir --at '2025-01-17 13:00' list\n\
                    pharmadir --at 2025-01-19T09:30 open",
                    input
                )
            }
            PharmadirError::PharmacyNotFound(query) => {
                format!(
                    "No pharmacy matches: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'pharmadir list' to see available pharmacies\n\
                    • Pass the pharmacy id, its exact name or its slug (e.g., pharmacie-centrale)",
                    query
                )
            }
            PharmadirError::InvalidScheduleFormat(msg) => {
                format!(
                    "Invalid schedule format: {}\n\n\
                    Opening hours use 24-hour HH:MM times, for example:\n\
                    lun = [{{ open = \"08:00\", close = \"12:00\" }}, {{ open = \"14:00\", close = \"20:00\" }}]\n\
                    dim = {{ closed = true }}",
                    msg
                )
            }
            PharmadirError::Config(msg) => {
                if msg.contains("Invalid language") {
                    format!(
                        "{}\n\n\
                        Valid languages: fr, en\n\
                        Example: pharmadir config language en",
                        msg
                    )
                } else if msg.contains("location") {
                    format!(
                        "{}\n\n\
                        Expected format: LATITUDE,LONGITUDE\n\
                        Example: pharmadir config location 33.9716,-6.8498",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PharmadirError
pub type Result<T> = std::result::Result<T, PharmadirError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_pharmadir_directory_suggestion() {
        let err = PharmadirError::NotPharmadirDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("pharmadir init"));
        assert!(msg.contains("PHARMADIR_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_instant_examples() {
        let err = PharmadirError::InvalidInstant("tomorrowish".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'tomorrowish'"));
        assert!(msg.contains("YYYY-MM-DD HH:MM"));
        assert!(msg.contains("Examples"));
    }

    #[test]
    fn test_pharmacy_not_found_suggestions() {
        let err = PharmadirError::PharmacyNotFound("nowhere".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("pharmadir list"));
        assert!(msg.contains("slug"));
    }

    #[test]
    fn test_schedule_format_shows_example() {
        let err = PharmadirError::InvalidScheduleFormat("invalid time '25:00'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("25:00"));
        assert!(msg.contains("closed = true"));
    }

    #[test]
    fn test_config_invalid_language_suggestions() {
        let err = PharmadirError::Config("Invalid language: de".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("fr, en"));
        assert!(msg.contains("pharmadir config language en"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            PharmadirError::NotPharmadirDirectory(PathBuf::from(".")).exit_code(),
            2
        );
        assert_eq!(PharmadirError::InvalidInstant(String::new()).exit_code(), 3);
        assert_eq!(PharmadirError::PharmacyNotFound(String::new()).exit_code(), 4);
        assert_eq!(
            PharmadirError::InvalidRecord {
                path: PathBuf::from("a.toml"),
                message: "bad".to_string()
            }
            .exit_code(),
            5
        );
        assert_eq!(PharmadirError::Config(String::new()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = PharmadirError::Config("Directory already initialized".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Directory already initialized");
    }
}
