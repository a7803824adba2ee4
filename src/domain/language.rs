//! Display language for status labels and schedules

use crate::domain::{DayKey, TimeOfDay};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Language used to render labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    pub fn day_name(&self, day: DayKey) -> &'static str {
        match self {
            Language::Fr => match day {
                DayKey::Lun => "Lundi",
                DayKey::Mar => "Mardi",
                DayKey::Mer => "Mercredi",
                DayKey::Jeu => "Jeudi",
                DayKey::Ven => "Vendredi",
                DayKey::Sam => "Samedi",
                DayKey::Dim => "Dimanche",
            },
            Language::En => match day {
                DayKey::Lun => "Monday",
                DayKey::Mar => "Tuesday",
                DayKey::Mer => "Wednesday",
                DayKey::Jeu => "Thursday",
                DayKey::Ven => "Friday",
                DayKey::Sam => "Saturday",
                DayKey::Dim => "Sunday",
            },
        }
    }

    /// Closed word for a pharmacy's time slots (`Fermée`, agreeing with "pharmacie")
    pub fn closed_word(&self) -> &'static str {
        match self {
            Language::Fr => "Fermée",
            Language::En => "Closed",
        }
    }

    /// Closed word on a line of the weekly table (`Lundi: Fermé`)
    pub fn closed_day_word(&self) -> &'static str {
        match self {
            Language::Fr => "Fermé",
            Language::En => "Closed",
        }
    }

    pub fn open_label(&self) -> &'static str {
        match self {
            Language::Fr => "Ouverte",
            Language::En => "Open",
        }
    }

    pub fn closed_label(&self) -> &'static str {
        self.closed_word()
    }

    pub fn closed_today_label(&self) -> &'static str {
        match self {
            Language::Fr => "Fermée aujourd'hui",
            Language::En => "Closed today",
        }
    }

    pub fn opens_at(&self, time: TimeOfDay) -> String {
        match self {
            Language::Fr => format!("Ouvre à {}", time),
            Language::En => format!("Opens at {}", time),
        }
    }

    pub fn closes_at(&self, time: TimeOfDay) -> String {
        match self {
            Language::Fr => format!("Ferme à {}", time),
            Language::En => format!("Closes at {}", time),
        }
    }

    pub fn today_at(&self, time: TimeOfDay) -> String {
        match self {
            Language::Fr => format!("Aujourd'hui à {}", time),
            Language::En => format!("Today at {}", time),
        }
    }

    pub fn day_at(&self, day: DayKey, time: TimeOfDay) -> String {
        match self {
            Language::Fr => format!("{} à {}", self.day_name(day), time),
            Language::En => format!("{} at {}", self.day_name(day), time),
        }
    }

    /// Heading for one day's hours in a listing
    pub fn hours_heading(&self, day: DayKey, is_today: bool) -> String {
        match (self, is_today) {
            (Language::Fr, true) => format!("Horaires aujourd'hui ({})", self.day_name(day)),
            (Language::Fr, false) => format!("Horaires du {}", self.day_name(day)),
            (Language::En, true) => format!("Hours today ({})", self.day_name(day)),
            (Language::En, false) => format!("Hours on {}", self.day_name(day)),
        }
    }

    /// Words accepted as "closed" when reading a schedule line back
    pub(crate) fn closed_words() -> &'static [&'static str] {
        &["fermée", "fermé", "fermee", "ferme", "closed"]
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fr" | "french" => Ok(Language::Fr),
            "en" | "english" => Ok(Language::En),
            _ => Err(format!(
                "Invalid language: '{}'. Valid languages are: fr, en",
                s
            )),
        }
    }
}
