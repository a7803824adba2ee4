//! Weekly opening-hour tables
//!
//! Records store a day's hours in several legacy shapes: a single
//! `{ open, close }` table, a list of them (split shifts), a
//! `{ closed = true }` marker, or nothing at all. Everything is normalised on
//! ingestion into [`DaySchedule`], so the evaluator never inspects shapes at
//! runtime.

use crate::domain::DayKey;
use crate::error::{PharmadirError, Result};
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

fn time_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap())
}

/// A wall-clock time with minute precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(PharmadirError::InvalidScheduleFormat(format!(
                "time out of range: {:02}:{:02}",
                hour, minute
            )));
        }
        Ok(TimeOfDay { hour, minute })
    }

    /// Truncate a clock time to the minute
    pub fn from_time(time: NaiveTime) -> Self {
        TimeOfDay {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn minutes_since_midnight(&self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = PharmadirError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            PharmadirError::InvalidScheduleFormat(format!(
                "invalid time '{}': expected HH:MM with HH in 00..23 and MM in 00..59",
                s
            ))
        };

        let captures = time_regex().captures(s.trim()).ok_or_else(invalid)?;
        let hour: u8 = captures[1].parse().map_err(|_| invalid())?;
        let minute: u8 = captures[2].parse().map_err(|_| invalid())?;
        TimeOfDay::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = PharmadirError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// One opening interval within a day, both bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
}

impl TimeInterval {
    pub fn new(open: TimeOfDay, close: TimeOfDay) -> Result<Self> {
        if open > close {
            return Err(PharmadirError::InvalidScheduleFormat(format!(
                "interval {} - {} closes before it opens",
                open, close
            )));
        }
        Ok(TimeInterval { open, close })
    }

    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.open <= time && time <= self.close
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.open, self.close)
    }
}

impl FromStr for TimeInterval {
    type Err = PharmadirError;

    fn from_str(s: &str) -> Result<Self> {
        let (open, close) = s.split_once('-').ok_or_else(|| {
            PharmadirError::InvalidScheduleFormat(format!(
                "invalid interval '{}': expected HH:MM - HH:MM",
                s.trim()
            ))
        })?;
        TimeInterval::new(open.parse()?, close.parse()?)
    }
}

/// Intervals of an open day: never empty, sorted by opening time.
///
/// Only [`DaySchedule::open`] builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenIntervals(Vec<TimeInterval>);

impl OpenIntervals {
    pub fn as_slice(&self) -> &[TimeInterval] {
        &self.0
    }
}

/// Opening hours of a single day
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DaySchedule {
    #[default]
    Closed,
    Open(OpenIntervals),
}

impl DaySchedule {
    /// Build a day from intervals in any order.
    ///
    /// Intervals are sorted by opening time, and an empty list is a closed day.
    pub fn open(mut intervals: Vec<TimeInterval>) -> Self {
        if intervals.is_empty() {
            return DaySchedule::Closed;
        }
        intervals.sort_by_key(|interval| (interval.open, interval.close));
        DaySchedule::Open(OpenIntervals(intervals))
    }

    pub fn intervals(&self) -> &[TimeInterval] {
        match self {
            DaySchedule::Closed => &[],
            DaySchedule::Open(intervals) => intervals.as_slice(),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DaySchedule::Open(_))
    }
}

impl FromStr for DaySchedule {
    type Err = PharmadirError;

    /// Read back a line produced by `format_time_slots`
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || crate::domain::Language::closed_words().contains(&trimmed.to_lowercase().as_str())
        {
            return Ok(DaySchedule::Closed);
        }

        let intervals = trimmed
            .split('/')
            .map(TimeInterval::from_str)
            .collect::<Result<Vec<_>>>()?;
        Ok(DaySchedule::open(intervals))
    }
}

/// Opening hours for the week, keyed by day
///
/// A day without an entry is closed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "BTreeMap<String, RawDayEntry>")]
pub struct WeeklySchedule {
    days: BTreeMap<DayKey, DaySchedule>,
}

impl WeeklySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_day(mut self, day: DayKey, schedule: DaySchedule) -> Self {
        self.days.insert(day, schedule);
        self
    }

    /// The day's entry, or None when the record has none
    pub fn day(&self, day: DayKey) -> Option<&DaySchedule> {
        self.days.get(&day)
    }

    pub fn intervals(&self, day: DayKey) -> &[TimeInterval] {
        self.day(day).map(DaySchedule::intervals).unwrap_or(&[])
    }
}

#[derive(Debug, Deserialize)]
struct RawInterval {
    open: String,
    close: String,
}

/// Every shape a day entry may take in a record
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDayEntry {
    Intervals(Vec<RawInterval>),
    Interval(RawInterval),
    Marker { closed: bool },
    Unrecognized(IgnoredAny),
}

impl TryFrom<RawInterval> for TimeInterval {
    type Error = PharmadirError;

    fn try_from(raw: RawInterval) -> Result<Self> {
        TimeInterval::new(raw.open.parse()?, raw.close.parse()?)
    }
}

fn normalize_day(day: DayKey, entry: RawDayEntry) -> Result<DaySchedule> {
    let schedule = match entry {
        RawDayEntry::Intervals(raw) => raw
            .into_iter()
            .map(TimeInterval::try_from)
            .collect::<Result<Vec<_>>>()
            .map(DaySchedule::open),
        RawDayEntry::Interval(raw) => TimeInterval::try_from(raw).map(|i| DaySchedule::open(vec![i])),
        // `closed = false` carries no hours either
        RawDayEntry::Marker { .. } => Ok(DaySchedule::Closed),
        RawDayEntry::Unrecognized(_) => Err(PharmadirError::InvalidScheduleFormat(
            "unrecognized day entry: expected an interval, a list of intervals or { closed = true }"
                .to_string(),
        )),
    };

    schedule.map_err(|e| match e {
        PharmadirError::InvalidScheduleFormat(msg) => {
            PharmadirError::InvalidScheduleFormat(format!("{}: {}", day, msg))
        }
        other => other,
    })
}

impl TryFrom<BTreeMap<String, RawDayEntry>> for WeeklySchedule {
    type Error = PharmadirError;

    fn try_from(raw: BTreeMap<String, RawDayEntry>) -> Result<Self> {
        let mut days = BTreeMap::new();
        for (key, entry) in raw {
            // Unknown keys are ignored
            if let Some(day) = DayKey::from_code(&key) {
                days.insert(day, normalize_day(day, entry)?);
            }
        }
        Ok(WeeklySchedule { days })
    }
}
