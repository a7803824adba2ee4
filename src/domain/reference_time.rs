//! Reference instant for status evaluation

use crate::error::{PharmadirError, Result};
use chrono::{Local, NaiveDateTime};

const FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse a local date-time such as `2025-01-17 13:00`
pub fn parse_reference_time(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| PharmadirError::InvalidInstant(input.to_string()))
}

/// The given instant, or the local wall clock
pub fn resolve_reference_time(input: Option<&str>) -> Result<NaiveDateTime> {
    match input {
        Some(text) => parse_reference_time(text),
        None => Ok(Local::now().naive_local()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expected(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 17)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    #[test]
    fn test_parse_space_and_t_separators() {
        assert_eq!(parse_reference_time("2025-01-17 13:00").unwrap(), expected(13, 0, 0));
        assert_eq!(parse_reference_time("2025-01-17T08:05").unwrap(), expected(8, 5, 0));
        assert_eq!(
            parse_reference_time(" 2025-01-17 23:59:30 ").unwrap(),
            expected(23, 59, 30)
        );
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["today", "2025-01-17", "17-01-2025 13:00", "2025-01-17 25:00"] {
            assert!(matches!(
                parse_reference_time(input),
                Err(PharmadirError::InvalidInstant(_))
            ));
        }
    }

    #[test]
    fn test_resolve_defaults_to_wall_clock() {
        let before = Local::now().naive_local();
        let resolved = resolve_reference_time(None).unwrap();
        assert!(resolved >= before);
    }
}
