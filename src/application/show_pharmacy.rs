//! Pharmacy detail use case

use crate::application::load_directory::Directory;
use crate::domain::{slugify, Coordinates, OpeningStatus, Pharmacy};
use crate::error::{PharmadirError, Result};
use chrono::NaiveDateTime;

/// Everything the detail view shows about one pharmacy
#[derive(Debug, Clone)]
pub struct PharmacyDetail {
    pub pharmacy: Pharmacy,
    pub status: OpeningStatus,
    /// Kilometres from the configured location
    pub distance_km: Option<f64>,
}

/// Look a pharmacy up by id, slug or name (case-insensitive)
pub fn find_pharmacy<'a>(directory: &'a Directory, needle: &str) -> Result<&'a Pharmacy> {
    let trimmed = needle.trim();
    let slug = slugify(trimmed);

    directory
        .pharmacies
        .iter()
        .find(|p| p.id == trimmed)
        .or_else(|| {
            directory
                .pharmacies
                .iter()
                .find(|p| !slug.is_empty() && p.slug() == slug)
        })
        .ok_or_else(|| PharmadirError::PharmacyNotFound(needle.to_string()))
}

pub fn show_pharmacy(
    directory: &Directory,
    needle: &str,
    now: NaiveDateTime,
    location: Option<Coordinates>,
) -> Result<PharmacyDetail> {
    let pharmacy = find_pharmacy(directory, needle)?;

    Ok(PharmacyDetail {
        status: pharmacy.status_at(now),
        distance_km: location.map(|from| from.distance_km(&pharmacy.coordinates())),
        pharmacy: pharmacy.clone(),
    })
}
