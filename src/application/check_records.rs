//! Validate record files use case

use crate::error::{PharmadirError, Result};
use crate::infrastructure::FileSystemProvider;
use std::collections::HashMap;
use std::path::PathBuf;

/// Result of validating every record file
#[derive(Debug, Clone, Default)]
pub struct RecordReport {
    pub valid: Vec<PathBuf>,
    pub invalid: Vec<(PathBuf, String)>,
}

impl RecordReport {
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }
}

/// Parse every record, flagging schedule errors and duplicate ids
pub fn check_records(provider: &FileSystemProvider) -> Result<RecordReport> {
    let mut report = RecordReport::default();
    let mut seen_ids: HashMap<String, PathBuf> = HashMap::new();

    for file in provider.read_all()? {
        match file.record {
            Ok(pharmacy) => {
                if let Some(first) = seen_ids.get(&pharmacy.id) {
                    let message = format!(
                        "duplicate id '{}' (already used by {})",
                        pharmacy.id,
                        first.display()
                    );
                    report.invalid.push((file.path, message));
                } else {
                    seen_ids.insert(pharmacy.id, file.path.clone());
                    report.valid.push(file.path);
                }
            }
            Err(PharmadirError::InvalidRecord { message, .. }) => {
                report.invalid.push((file.path, message))
            }
            Err(e) => report.invalid.push((file.path, e.to_string())),
        }
    }

    Ok(report)
}
