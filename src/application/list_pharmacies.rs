//! List pharmacies use case

use crate::application::load_directory::Directory;
use crate::domain::{sort_by_name, DayKey, PharmacyWithStatus};
use chrono::NaiveDateTime;

/// Filters applied to a listing
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Case-insensitive substring of the name or address
    pub query: Option<String>,
    /// Keep pharmacies with hours on this day
    pub day: Option<DayKey>,
    /// Keep pharmacies open at the reference instant
    pub open_only: bool,
}

/// Open/closed tally over the whole directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub open: usize,
    pub closed: usize,
}

#[derive(Debug, Clone)]
pub struct Listing {
    pub entries: Vec<PharmacyWithStatus>,
    pub counts: StatusCounts,
}

/// Evaluate every pharmacy at `now`, filter, and sort by name
pub fn list_pharmacies(directory: &Directory, options: &ListOptions, now: NaiveDateTime) -> Listing {
    let evaluated: Vec<PharmacyWithStatus> = directory
        .pharmacies
        .iter()
        .cloned()
        .map(|pharmacy| PharmacyWithStatus::evaluate(pharmacy, now))
        .collect();

    let open = evaluated.iter().filter(|entry| entry.status.is_open).count();
    let counts = StatusCounts {
        open,
        closed: evaluated.len() - open,
    };

    let query = options.query.as_deref().unwrap_or("");
    let mut entries: Vec<PharmacyWithStatus> = evaluated
        .into_iter()
        .filter(|entry| entry.pharmacy.matches(query))
        .filter(|entry| options.day.is_none_or(|day| entry.pharmacy.is_open_on(day)))
        .filter(|entry| !options.open_only || entry.status.is_open)
        .collect();
    sort_by_name(&mut entries);

    Listing { entries, counts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Pharmacy;
    use crate::infrastructure::provider::DEMO_RECORD;
    use chrono::NaiveDate;

    fn pharmacy(id: &str, name: &str, address: &str, hours: &str) -> Pharmacy {
        Pharmacy::from_toml(&format!(
            "id = \"{}\"\nname = \"{}\"\naddress = \"{}\"\nlatitude = 33.9\nlongitude = -6.9\n\n[opening_hours]\n{}\n",
            id, name, address, hours
        ))
        .unwrap()
    }

    fn directory() -> Directory {
        Directory::live(vec![
            pharmacy("1", "Pharmacie Zahra", "Rue des Roses", "lun = { open = \"08:00\", close = \"20:00\" }"),
            pharmacy("2", "Pharmacie Atlas", "Avenue Hassan II", "mar = { open = \"09:00\", close = \"18:00\" }"),
            Pharmacy::from_toml(DEMO_RECORD).unwrap(),
        ])
    }

    /// Monday, Jan 13, 2025
    fn monday_at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 13)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn names(listing: &Listing) -> Vec<&str> {
        listing
            .entries
            .iter()
            .map(|entry| entry.pharmacy.name.as_str())
            .collect()
    }

    #[test]
    fn test_lists_all_sorted_by_name() {
        let listing = list_pharmacies(&directory(), &ListOptions::default(), monday_at(10));
        assert_eq!(
            names(&listing),
            vec![
                "Pharmacie Atlas",
                "Pharmacie Mock Centrale Harhoura",
                "Pharmacie Zahra"
            ]
        );
        assert_eq!(listing.counts, StatusCounts { open: 2, closed: 1 });
    }

    #[test]
    fn test_query_filters_name_and_address() {
        let options = ListOptions {
            query: Some("hassan".to_string()),
            ..Default::default()
        };
        let listing = list_pharmacies(&directory(), &options, monday_at(10));
        assert_eq!(names(&listing), vec!["Pharmacie Atlas"]);
        // Counts cover the whole directory
        assert_eq!(listing.counts, StatusCounts { open: 2, closed: 1 });
    }

    #[test]
    fn test_day_filter() {
        let options = ListOptions {
            day: Some(DayKey::Mar),
            ..Default::default()
        };
        let listing = list_pharmacies(&directory(), &options, monday_at(10));
        assert_eq!(
            names(&listing),
            vec!["Pharmacie Atlas", "Pharmacie Mock Centrale Harhoura"]
        );

        let options = ListOptions {
            day: Some(DayKey::Dim),
            ..Default::default()
        };
        assert!(list_pharmacies(&directory(), &options, monday_at(10)).entries.is_empty());
    }

    #[test]
    fn test_open_only() {
        let options = ListOptions {
            open_only: true,
            ..Default::default()
        };
        let listing = list_pharmacies(&directory(), &options, monday_at(13));
        // The demo pharmacy is on its lunch break at 13:00
        assert_eq!(names(&listing), vec!["Pharmacie Zahra"]);
    }
}
