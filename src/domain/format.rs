//! Plain-text rendering of opening hours

use crate::domain::{DayKey, DaySchedule, Language, WeeklySchedule};

/// Render one day's hours: `08:00 - 12:00 / 14:00 - 20:00`, or the closed word.
///
/// The output parses back into the same [`DaySchedule`].
pub fn format_time_slots(day: Option<&DaySchedule>, language: Language) -> String {
    let intervals = day.map(DaySchedule::intervals).unwrap_or(&[]);
    if intervals.is_empty() {
        return language.closed_word().to_string();
    }

    intervals
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Render the whole week, one `<Day>: <hours>` line per day, Monday first.
///
/// Closed days read `Lundi: Fermé`.
pub fn format_weekly_schedule(schedule: &WeeklySchedule, language: Language) -> String {
    DayKey::ALL
        .iter()
        .map(|&day| match schedule.day(day) {
            Some(hours) if hours.is_open() => format!(
                "{}: {}",
                language.day_name(day),
                format_time_slots(Some(hours), language)
            ),
            _ => format!("{}: {}", language.day_name(day), language.closed_day_word()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
