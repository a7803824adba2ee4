//! Opening status evaluation
//!
//! All functions here are pure: the reference instant is always passed in.

use crate::domain::day::current_day_key;
use crate::domain::{DayKey, DaySchedule, Language, TimeOfDay, WeeklySchedule};
use chrono::{Datelike, Days, NaiveDateTime};

/// Number of calendar days, today included, searched for the next opening
pub const LOOKAHEAD_DAYS: u8 = 7;

/// Headline of an opening status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLabel {
    Open,
    Closed,
    /// No hours at all today
    ClosedToday,
}

impl StatusLabel {
    pub fn render(&self, language: Language) -> &'static str {
        match self {
            StatusLabel::Open => language.open_label(),
            StatusLabel::Closed => language.closed_label(),
            StatusLabel::ClosedToday => language.closed_today_label(),
        }
    }
}

/// The next opening found by [`next_open_time`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextOpening {
    pub day: DayKey,
    /// 0 for today
    pub days_ahead: u8,
    pub time: TimeOfDay,
}

impl NextOpening {
    pub fn is_today(&self) -> bool {
        self.days_ahead == 0
    }

    pub fn describe(&self, language: Language) -> String {
        if self.is_today() {
            language.today_at(self.time)
        } else {
            language.day_at(self.day, self.time)
        }
    }
}

/// The next transition after the reference instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextChange {
    /// A later interval today
    OpensAt(TimeOfDay),
    /// End of the current interval
    ClosesAt(TimeOfDay),
    NextOpening(NextOpening),
}

impl NextChange {
    pub fn describe(&self, language: Language) -> String {
        match self {
            NextChange::OpensAt(time) => language.opens_at(*time),
            NextChange::ClosesAt(time) => language.closes_at(*time),
            NextChange::NextOpening(opening) => opening.describe(language),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningStatus {
    pub is_open: bool,
    pub label: StatusLabel,
    /// None when nothing opens within the lookahead window
    pub next_change: Option<NextChange>,
}

impl OpeningStatus {
    fn closed(label: StatusLabel, next_change: Option<NextChange>) -> Self {
        OpeningStatus {
            is_open: false,
            label,
            next_change,
        }
    }

    pub fn next_change_description(&self, language: Language) -> Option<String> {
        self.next_change.map(|change| change.describe(language))
    }
}

/// Evaluate whether the schedule is open at `now` and what happens next.
///
/// Today's intervals are scanned in order: the first one that has not opened
/// yet, or that contains `now` (both bounds inclusive), decides the status.
pub fn current_status(schedule: &WeeklySchedule, now: NaiveDateTime) -> OpeningStatus {
    let today = current_day_key(now);

    let intervals = match schedule.day(today) {
        Some(DaySchedule::Open(intervals)) => intervals.as_slice(),
        _ => {
            return OpeningStatus::closed(
                StatusLabel::ClosedToday,
                next_open_time(schedule, now).map(NextChange::NextOpening),
            )
        }
    };

    let current = TimeOfDay::from_time(now.time());
    for interval in intervals {
        if current < interval.open {
            return OpeningStatus::closed(
                StatusLabel::Closed,
                Some(NextChange::OpensAt(interval.open)),
            );
        }
        if interval.contains(current) {
            return OpeningStatus {
                is_open: true,
                label: StatusLabel::Open,
                next_change: Some(NextChange::ClosesAt(interval.close)),
            };
        }
    }

    OpeningStatus::closed(
        StatusLabel::Closed,
        next_open_time(schedule, now).map(NextChange::NextOpening),
    )
}

/// Find the next opening within [`LOOKAHEAD_DAYS`] calendar days of `now`.
///
/// Today only counts openings strictly after the current minute; on later
/// days the first interval counts whatever its time. Days past the end of
/// the calendar are never reached.
pub fn next_open_time(schedule: &WeeklySchedule, now: NaiveDateTime) -> Option<NextOpening> {
    let current = TimeOfDay::from_time(now.time());

    (0..LOOKAHEAD_DAYS).find_map(|days_ahead| {
        let date = now.date().checked_add_days(Days::new(u64::from(days_ahead)))?;
        let day = DayKey::from(date.weekday());
        let intervals = schedule.intervals(day);

        let opening = if days_ahead == 0 {
            intervals
                .iter()
                .map(|interval| interval.open)
                .find(|open| *open > current)
        } else {
            intervals.first().map(|interval| interval.open)
        };

        opening.map(|time| NextOpening {
            day,
            days_ahead,
            time,
        })
    })
}

/// Whether the day has any opening hours.
///
/// Agrees with [`current_status`]: an absent, closed or empty day is closed.
pub fn is_open_on_day(schedule: &WeeklySchedule, day: DayKey) -> bool {
    schedule.day(day).is_some_and(DaySchedule::is_open)
}
