//! Domain layer - Business logic and domain models

pub mod contact;
pub mod day;
pub mod format;
pub mod language;
pub mod pharmacy;
pub mod reference_time;
pub mod schedule;
pub mod status;

pub use contact::{format_phone_number, Coordinates};
pub use day::{current_day_key, DayKey};
pub use format::{format_time_slots, format_weekly_schedule};
pub use language::Language;
pub use pharmacy::{slugify, sort_by_name, Pharmacy, PharmacyWithStatus};
pub use reference_time::{parse_reference_time, resolve_reference_time};
pub use schedule::{DaySchedule, OpenIntervals, TimeInterval, TimeOfDay, WeeklySchedule};
pub use status::{
    current_status, is_open_on_day, next_open_time, NextChange, NextOpening, OpeningStatus,
    StatusLabel,
};
