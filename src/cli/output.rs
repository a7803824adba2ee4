//! Output formatting utilities

use crate::application::{DataSource, PharmacyDetail, RecordReport, StatusCounts};
use crate::domain::{
    format_phone_number, format_time_slots, format_weekly_schedule, DayKey, Language,
    OpeningStatus, PharmacyWithStatus,
};

fn plural(count: usize) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}

fn status_line(status: &OpeningStatus, language: Language) -> String {
    match status.next_change_description(language) {
        Some(next) => format!("[{}] {}", status.label.render(language), next),
        None => format!("[{}]", status.label.render(language)),
    }
}

fn phone_label(language: Language) -> &'static str {
    match language {
        Language::Fr => "Tél",
        Language::En => "Phone",
    }
}

/// Format pharmacies with their status and the hours of `day`.
///
/// `today` only decides how the hours heading is worded.
pub fn format_pharmacy_list(
    entries: &[PharmacyWithStatus],
    day: DayKey,
    today: DayKey,
    language: Language,
) -> String {
    if entries.is_empty() {
        return match language {
            Language::Fr => "Aucune pharmacie trouvée".to_string(),
            Language::En => "No pharmacies found".to_string(),
        };
    }

    let heading = language.hours_heading(day, day == today);
    let mut output = String::new();
    for entry in entries {
        let pharmacy = &entry.pharmacy;
        output.push_str(&format!(
            "{} {}\n",
            pharmacy.name,
            status_line(&entry.status, language)
        ));
        output.push_str(&format!("    {}\n", pharmacy.address));
        if let Some(phone) = &pharmacy.phone {
            output.push_str(&format!(
                "    {}: {}\n",
                phone_label(language),
                format_phone_number(phone)
            ));
        }
        output.push_str(&format!(
            "    {}: {}\n",
            heading,
            format_time_slots(pharmacy.opening_hours.day(day), language)
        ));
    }
    output
}

/// `2 ouvertes, 1 fermée`
pub fn format_counts(counts: StatusCounts, language: Language) -> String {
    match language {
        Language::Fr => format!(
            "{} ouverte{}, {} fermée{}",
            counts.open,
            plural(counts.open),
            counts.closed,
            plural(counts.closed)
        ),
        Language::En => format!("{} open, {} closed", counts.open, counts.closed),
    }
}

/// Headline of the on-duty view
pub fn format_open_summary(open: usize, language: Language) -> String {
    match (language, open) {
        (Language::Fr, 0) => "Aucune pharmacie ouverte actuellement".to_string(),
        (Language::Fr, n) => format!(
            "{} pharmacie{} ouverte{} maintenant",
            n,
            plural(n),
            plural(n)
        ),
        (Language::En, 0) => "No pharmacy open right now".to_string(),
        (Language::En, 1) => "1 pharmacy open now".to_string(),
        (Language::En, n) => format!("{} pharmacies open now", n),
    }
}

/// Warning shown when demo records are displayed
pub fn format_demo_banner(source: &DataSource, language: Language) -> Option<String> {
    let DataSource::Demo { reason } = source else {
        return None;
    };

    let banner = match language {
        Language::Fr => "Mode démo : données d'exemple affichées",
        Language::En => "Demo mode: showing sample data",
    };
    Some(match reason {
        Some(reason) => format!("{} ({})", banner, reason),
        None => banner.to_string(),
    })
}

/// Format the detail view of one pharmacy
pub fn format_pharmacy_detail(detail: &PharmacyDetail, language: Language) -> String {
    let pharmacy = &detail.pharmacy;
    let (address, status, hours) = match language {
        Language::Fr => ("Adresse", "Statut", "Horaires"),
        Language::En => ("Address", "Status", "Opening hours"),
    };

    let mut output = format!("{}\n", pharmacy.name);
    output.push_str(&format!("{}: {}\n", address, pharmacy.address));
    if let Some(phone) = &pharmacy.phone {
        output.push_str(&format!(
            "{}: {}\n",
            phone_label(language),
            format_phone_number(phone)
        ));
    }
    output.push_str(&format!("{}: {}\n", status, status_line(&detail.status, language)));
    if let Some(distance) = detail.distance_km {
        output.push_str(&format!("Distance: {:.2} km\n", distance));
    }
    output.push_str(&format!("{}:\n", hours));
    for line in format_weekly_schedule(&pharmacy.opening_hours, language).lines() {
        output.push_str(&format!("  {}\n", line));
    }
    output
}

/// Format the result of validating record files
pub fn format_check_report(report: &RecordReport) -> String {
    let mut output = String::new();
    for (path, message) in &report.invalid {
        output.push_str(&format!("INVALID {}: {}\n", path.display(), message));
    }
    output.push_str(&format!(
        "{} valid, {} invalid\n",
        report.valid.len(),
        report.invalid.len()
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Pharmacy;
    use crate::infrastructure::provider::DEMO_RECORD;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::path::PathBuf;

    /// Monday, Jan 13, 2025
    fn monday_at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 13)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn demo_entry(hour: u32) -> PharmacyWithStatus {
        PharmacyWithStatus::evaluate(Pharmacy::from_toml(DEMO_RECORD).unwrap(), monday_at(hour))
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(
            format_pharmacy_list(&[], DayKey::Lun, DayKey::Lun, Language::Fr),
            "Aucune pharmacie trouvée"
        );
        assert_eq!(
            format_pharmacy_list(&[], DayKey::Lun, DayKey::Lun, Language::En),
            "No pharmacies found"
        );
    }

    #[test]
    fn test_format_pharmacy_list() {
        let output = format_pharmacy_list(&[demo_entry(9)], DayKey::Lun, DayKey::Lun, Language::Fr);
        assert_eq!(
            output,
            "Pharmacie Mock Centrale Harhoura [Ouverte] Ferme à 12:00\n    \
             Avenue Mohammed V, Centre Harhoura\n    \
             Tél: +212 537 123 456\n    \
             Horaires aujourd'hui (Lundi): 08:00 - 12:00 / 14:00 - 20:00\n"
        );
    }

    #[test]
    fn test_format_list_hours_of_another_day() {
        let output = format_pharmacy_list(&[demo_entry(9)], DayKey::Ven, DayKey::Lun, Language::Fr);
        assert!(output.ends_with("    Horaires du Vendredi: 08:00 - 12:30 / 14:00 - 19:00\n"));

        let output = format_pharmacy_list(&[demo_entry(9)], DayKey::Dim, DayKey::Lun, Language::En);
        assert!(output.ends_with("    Hours on Sunday: Closed\n"));
    }

    #[test]
    fn test_format_list_without_next_change() {
        let mut entry = demo_entry(13);
        entry.status.next_change = None;
        entry.pharmacy.phone = None;
        let output = format_pharmacy_list(&[entry], DayKey::Lun, DayKey::Lun, Language::En);
        assert!(output.starts_with("Pharmacie Mock Centrale Harhoura [Closed]\n"));
        assert!(!output.contains("Phone"));
    }

    #[test]
    fn test_format_counts() {
        let counts = StatusCounts { open: 2, closed: 1 };
        assert_eq!(format_counts(counts, Language::Fr), "2 ouvertes, 1 fermée");
        assert_eq!(format_counts(counts, Language::En), "2 open, 1 closed");
    }

    #[test]
    fn test_format_open_summary() {
        assert_eq!(
            format_open_summary(0, Language::Fr),
            "Aucune pharmacie ouverte actuellement"
        );
        assert_eq!(format_open_summary(1, Language::Fr), "1 pharmacie ouverte maintenant");
        assert_eq!(format_open_summary(3, Language::En), "3 pharmacies open now");
    }

    #[test]
    fn test_demo_banner() {
        assert_eq!(format_demo_banner(&DataSource::Live, Language::Fr), None);
        assert_eq!(
            format_demo_banner(&DataSource::Demo { reason: None }, Language::En).as_deref(),
            Some("Demo mode: showing sample data")
        );
        let banner = format_demo_banner(
            &DataSource::Demo {
                reason: Some("Data directory not found: x".to_string()),
            },
            Language::Fr,
        )
        .unwrap();
        assert!(banner.starts_with("Mode démo"));
        assert!(banner.ends_with("(Data directory not found: x)"));
    }

    #[test]
    fn test_format_detail() {
        let entry = demo_entry(13);
        let detail = PharmacyDetail {
            pharmacy: entry.pharmacy,
            status: entry.status,
            distance_km: Some(1.5),
        };
        let output = format_pharmacy_detail(&detail, Language::Fr);
        assert!(output.contains("Adresse: Avenue Mohammed V, Centre Harhoura\n"));
        assert!(output.contains("Statut: [Fermée] Ouvre à 14:00\n"));
        assert!(output.contains("Distance: 1.50 km\n"));
        assert!(output.contains("  Vendredi: 08:00 - 12:30 / 14:00 - 19:00\n"));
        assert!(output.contains("  Dimanche: Fermé\n"));
    }

    #[test]
    fn test_format_check_report() {
        let report = RecordReport {
            valid: vec![PathBuf::from("a.toml")],
            invalid: vec![(PathBuf::from("b.toml"), "bad time".to_string())],
        };
        assert_eq!(
            format_check_report(&report),
            "INVALID b.toml: bad time\n1 valid, 1 invalid\n"
        );
    }
}
