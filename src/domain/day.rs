//! Day-keys and weekday mapping

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven fixed day codes used in opening-hour tables.
///
/// Variants are declared Monday first, so `Ord` follows the week as it is
/// displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKey {
    Lun,
    Mar,
    Mer,
    Jeu,
    Ven,
    Sam,
    Dim,
}

impl DayKey {
    /// All day-keys, Monday first
    pub const ALL: [DayKey; 7] = [
        DayKey::Lun,
        DayKey::Mar,
        DayKey::Mer,
        DayKey::Jeu,
        DayKey::Ven,
        DayKey::Sam,
        DayKey::Dim,
    ];

    /// The three-letter code as it appears in records
    pub fn code(&self) -> &'static str {
        match self {
            DayKey::Lun => "lun",
            DayKey::Mar => "mar",
            DayKey::Mer => "mer",
            DayKey::Jeu => "jeu",
            DayKey::Ven => "ven",
            DayKey::Sam => "sam",
            DayKey::Dim => "dim",
        }
    }

    pub fn weekday(&self) -> Weekday {
        match self {
            DayKey::Lun => Weekday::Mon,
            DayKey::Mar => Weekday::Tue,
            DayKey::Mer => Weekday::Wed,
            DayKey::Jeu => Weekday::Thu,
            DayKey::Ven => Weekday::Fri,
            DayKey::Sam => Weekday::Sat,
            DayKey::Dim => Weekday::Sun,
        }
    }

    /// Parse a record key, returning None for anything that is not a day code
    pub fn from_code(code: &str) -> Option<Self> {
        DayKey::ALL.into_iter().find(|day| day.code() == code)
    }
}

impl From<Weekday> for DayKey {
    fn from(weekday: Weekday) -> Self {
        // Monday-first: Sunday lands in the last slot
        DayKey::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DayKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayKey::from_code(&s.trim().to_lowercase()).ok_or_else(|| {
            format!(
                "Invalid day: '{}'. Valid days are: lun, mar, mer, jeu, ven, sam, dim",
                s
            )
        })
    }
}

/// Day-key of the calendar day containing `now`
pub fn current_day_key(now: NaiveDateTime) -> DayKey {
    DayKey::from(now.weekday())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_sunday_maps_to_last_key() {
        // Sunday, Jan 19, 2025
        assert_eq!(current_day_key(at(2025, 1, 19)), DayKey::Dim);
        assert_eq!(DayKey::ALL.last(), Some(&DayKey::Dim));
    }

    #[test]
    fn test_monday_maps_to_first_key() {
        // Monday, Jan 13, 2025
        assert_eq!(current_day_key(at(2025, 1, 13)), DayKey::Lun);
        assert_eq!(DayKey::ALL[0], DayKey::Lun);
    }

    #[test]
    fn test_every_weekday_round_trips() {
        for day in DayKey::ALL {
            assert_eq!(DayKey::from(day.weekday()), day);
        }
    }

    #[test]
    fn test_from_code() {
        assert_eq!(DayKey::from_code("jeu"), Some(DayKey::Jeu));
        assert_eq!(DayKey::from_code("thu"), None);
        assert_eq!(DayKey::from_code("JEU"), None);
    }

    #[test]
    fn test_from_str_is_lenient_on_case() {
        assert_eq!(DayKey::from_str(" VEN ").unwrap(), DayKey::Ven);
        assert!(DayKey::from_str("friday").is_err());
    }

    #[test]
    fn test_ordering_is_monday_first() {
        let mut days = vec![DayKey::Dim, DayKey::Mer, DayKey::Lun];
        days.sort();
        assert_eq!(days, vec![DayKey::Lun, DayKey::Mer, DayKey::Dim]);
    }
}
