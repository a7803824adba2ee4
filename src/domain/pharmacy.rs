//! Pharmacy records and directory search

use crate::domain::status::{current_status, is_open_on_day, OpeningStatus};
use crate::domain::{Coordinates, DayKey, WeeklySchedule};
use crate::error::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

fn default_active() -> bool {
    true
}

/// A pharmacy as supplied by a data provider
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pharmacy {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub opening_hours: WeeklySchedule,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Pharmacy {
    /// Parse a single record; opening hours are validated here
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    pub fn status_at(&self, now: NaiveDateTime) -> OpeningStatus {
        current_status(&self.opening_hours, now)
    }

    pub fn is_open_on(&self, day: DayKey) -> bool {
        is_open_on_day(&self.opening_hours, day)
    }

    /// Case-insensitive substring match on name or address.
    /// A blank query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.address.to_lowercase().contains(&query)
    }
}

/// A pharmacy together with its status at some instant
#[derive(Debug, Clone)]
pub struct PharmacyWithStatus {
    pub pharmacy: Pharmacy,
    pub status: OpeningStatus,
}

impl PharmacyWithStatus {
    pub fn evaluate(pharmacy: Pharmacy, now: NaiveDateTime) -> Self {
        let status = pharmacy.status_at(now);
        PharmacyWithStatus { pharmacy, status }
    }
}

/// Sort by name, ignoring case
pub fn sort_by_name(pharmacies: &mut [PharmacyWithStatus]) {
    pharmacies.sort_by(|a, b| {
        a.pharmacy
            .name
            .to_lowercase()
            .cmp(&b.pharmacy.name.to_lowercase())
            .then_with(|| a.pharmacy.id.cmp(&b.pharmacy.id))
    });
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'â' | 'ä' | 'á' | 'ã' => 'a',
        'ç' => 'c',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'î' | 'ï' | 'í' | 'ì' => 'i',
        'ô' | 'ö' | 'ó' | 'ò' | 'õ' => 'o',
        'ù' | 'û' | 'ü' | 'ú' => 'u',
        'ÿ' => 'y',
        _ => c,
    }
}

/// URL-friendly identifier: `Pharmacie Al Amal (Centre)` -> `pharmacie-al-amal-centre`
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.to_lowercase().chars().map(fold_accent) {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
