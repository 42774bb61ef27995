//! ICS (iCalendar) rendering.
//!
//! Two dialects are supported. `Compat` reproduces the layout existing
//! consumers import: `\n` line endings, unescaped text and the ORGANIZER
//! line written twice. `Rfc5545` is built with the icalendar crate: CRLF
//! endings, TEXT escaping, a single ORGANIZER, DTSTAMP and line folding.

use chrono::{DateTime, Utc};
use icalendar::{Calendar, Component, Property};

use crate::config::Organizer;
use crate::slot::TimeSlot;
use crate::text::compact_timestamp;

const PRODID: &str = "-//meetslice//NONSGML v1.0//EN";
const UID_DOMAIN: &str = "meetslice.local";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IcsDialect {
    #[default]
    Compat,
    Rfc5545 {
        /// Value written to every DTSTAMP
        stamp: DateTime<Utc>,
    },
}

/// Render a VCALENDAR with one VEVENT per slot, in slot order.
pub fn render(organizer: &Organizer, slots: &[TimeSlot], dialect: &IcsDialect) -> String {
    match dialect {
        IcsDialect::Compat => render_compat(organizer, slots),
        IcsDialect::Rfc5545 { stamp } => render_strict(organizer, slots, stamp),
    }
}

/// Unique per slot within a render, stable across renders.
pub fn slot_uid(slot: &TimeSlot) -> String {
    format!("{}@{}", compact_timestamp(&slot.start), UID_DOMAIN)
}

fn header() -> Vec<String> {
    vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PRODID),
    ]
}

fn render_compat(organizer: &Organizer, slots: &[TimeSlot]) -> String {
    let organizer_line = format!("ORGANIZER;CN={}:MAILTO:{}", organizer.name, organizer.email);
    let mut lines = header();

    for slot in slots {
        lines.extend([
            "BEGIN:VEVENT".to_string(),
            format!("UID:{}", slot_uid(slot)),
            // Some clients read the first ORGANIZER, others the last.
            organizer_line.clone(),
            organizer_line.clone(),
            format!("DTSTART:{}", compact_timestamp(&slot.start)),
            format!("DTEND:{}", compact_timestamp(&slot.end)),
            format!("SUMMARY:{}", slot.summary),
            format!("DESCRIPTION:{}", slot.description),
            "SEQUENCE:1".to_string(),
            "END:VEVENT".to_string(),
        ]);
    }

    lines.push("END:VCALENDAR".to_string());
    lines.join("\n")
}

fn render_strict(organizer: &Organizer, slots: &[TimeSlot], stamp: &DateTime<Utc>) -> String {
    let mut cal = Calendar::new();
    let dtstamp = stamp.format("%Y%m%dT%H%M%SZ").to_string();

    for slot in slots {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&slot_uid(slot));
        ics_event.add_property("DTSTAMP", &dtstamp);
        ics_event.add_property("DTSTART", compact_timestamp(&slot.start));
        ics_event.add_property("DTEND", compact_timestamp(&slot.end));
        // TEXT escaping covers `\n` but not a bare `\r`.
        ics_event.summary(&slot.summary.replace('\r', ""));
        ics_event.description(&slot.description.replace('\r', ""));
        ics_event.sequence(1);

        // CAL-ADDRESS values and parameters are written verbatim.
        let mut prop = Property::new(
            "ORGANIZER",
            format!("mailto:{}", single_line(&organizer.email)),
        );
        prop.add_parameter("CN", &single_line(&organizer.name).replace('"', ""));
        ics_event.append_property(prop);

        cal.push(ics_event.done());
    }

    strip_ics_bloat(&cal.done().to_string())
}

/// Drop control characters so a value cannot start a new content line.
fn single_line(s: &str) -> String {
    s.chars().filter(|c| !c.is_control()).collect()
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with ours
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(PRODID);
            result.push_str("\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::slot::generate;
    use chrono::{NaiveDate, NaiveTime, TimeZone};
    use std::collections::HashSet;

    fn make_slots(end: NaiveTime, summary: &str, description: &str) -> Vec<TimeSlot> {
        let config = Configuration::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end,
            1800,
        )
        .with_text(summary, description);
        generate(&config)
    }

    fn organizer() -> Organizer {
        Organizer::new("Ada", "ada@example.com")
    }

    fn strict() -> IcsDialect {
        IcsDialect::Rfc5545 {
            stamp: Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn compat_layout_is_exact() {
        let slots = make_slots(NaiveTime::from_hms_opt(9, 30, 0).unwrap(), "Standup", "Daily");
        let ics = render(&organizer(), &slots, &IcsDialect::Compat);

        let expected = [
            "BEGIN:VCALENDAR",
            "VERSION:2.0",
            "PRODID:-//meetslice//NONSGML v1.0//EN",
            "BEGIN:VEVENT",
            "UID:20240101T090000@meetslice.local",
            "ORGANIZER;CN=Ada:MAILTO:ada@example.com",
            "ORGANIZER;CN=Ada:MAILTO:ada@example.com",
            "DTSTART:20240101T090000",
            "DTEND:20240101T092959",
            "SUMMARY:Standup (1/1)",
            "DESCRIPTION:Daily (1/1)",
            "SEQUENCE:1",
            "END:VEVENT",
            "END:VCALENDAR",
        ]
        .join("\n");

        assert_eq!(ics, expected);
    }

    #[test]
    fn compat_empty_is_header_and_footer() {
        let ics = render(&organizer(), &[], &IcsDialect::Compat);
        assert_eq!(
            ics,
            "BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:-//meetslice//NONSGML v1.0//EN\nEND:VCALENDAR"
        );
    }

    #[test]
    fn compat_does_not_escape_text() {
        let slots = make_slots(NaiveTime::from_hms_opt(9, 30, 0).unwrap(), "a;b,c", "x\\y");
        let ics = render(&organizer(), &slots, &IcsDialect::Compat);
        assert!(ics.contains("SUMMARY:a;b,c (1/1)"));
        assert!(ics.contains("DESCRIPTION:x\\y (1/1)"));
    }

    #[test]
    fn uids_are_unique_and_stable() {
        let slots = make_slots(NaiveTime::from_hms_opt(17, 0, 0).unwrap(), "Standup", "");
        let first = render(&organizer(), &slots, &IcsDialect::Compat);
        let second = render(&organizer(), &slots, &IcsDialect::Compat);
        assert_eq!(first, second);

        let uids: Vec<&str> = first.lines().filter(|l| l.starts_with("UID:")).collect();
        assert_eq!(uids.len(), slots.len());
        let unique: HashSet<&str> = uids.iter().copied().collect();
        assert_eq!(unique.len(), uids.len());
    }

    #[test]
    fn event_count_matches_slots() {
        let slots = make_slots(NaiveTime::from_hms_opt(12, 0, 0).unwrap(), "Standup", "");
        let ics = render(&organizer(), &slots, &IcsDialect::Compat);
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 6);
        assert_eq!(ics.matches("END:VEVENT").count(), 6);
    }

    #[test]
    fn strict_escapes_and_uses_crlf() {
        let slots = make_slots(NaiveTime::from_hms_opt(9, 30, 0).unwrap(), "a;b,c", "x\\y");
        let ics = render(&organizer(), &slots, &strict());

        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert!(!ics.replace("\r\n", "").contains('\n'));
        assert!(ics.contains("SUMMARY:a\\;b\\,c (1/1)\r\n"));
        assert!(ics.contains("DESCRIPTION:x\\\\y (1/1)\r\n"));
        assert!(ics.contains("DTSTAMP:20240101T080000Z\r\n"));
    }

    #[test]
    fn strict_uses_our_prodid() {
        let ics = render(&organizer(), &[], &strict());

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.contains("VERSION:2.0\r\n"));
        assert!(ics.contains("PRODID:-//meetslice//NONSGML v1.0//EN\r\n"));
        assert!(!ics.contains("ICALENDAR-RS"));
        assert!(!ics.contains("CALSCALE"));
        assert!(!ics.contains("BEGIN:VEVENT"));
    }

    #[test]
    fn strict_event_properties() {
        let slots = make_slots(NaiveTime::from_hms_opt(9, 30, 0).unwrap(), "Standup", "Daily");
        let ics = render(&organizer(), &slots, &strict());

        assert!(ics.contains("UID:20240101T090000@meetslice.local\r\n"));
        assert!(ics.contains("DTSTART:20240101T090000\r\n"));
        assert!(ics.contains("DTEND:20240101T092959\r\n"));
        assert!(ics.contains("SEQUENCE:1\r\n"));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
    }

    #[test]
    fn strict_single_organizer() {
        let slots = make_slots(NaiveTime::from_hms_opt(9, 30, 0).unwrap(), "Standup", "");
        let ics = render(&organizer(), &slots, &strict());

        let organizers: Vec<&str> = ics.lines().filter(|l| l.starts_with("ORGANIZER")).collect();
        assert_eq!(organizers, vec!["ORGANIZER;CN=Ada:mailto:ada@example.com"]);
    }

    #[test]
    fn strict_quotes_name_with_colon() {
        let slots = make_slots(NaiveTime::from_hms_opt(9, 30, 0).unwrap(), "Standup", "");
        let ics = render(&Organizer::new("Ops: Ada", "ada@example.com"), &slots, &strict());

        let organizers: Vec<&str> = ics.lines().filter(|l| l.starts_with("ORGANIZER")).collect();
        assert_eq!(organizers, vec!["ORGANIZER;CN=\"Ops: Ada\":mailto:ada@example.com"]);
    }

    #[test]
    fn strict_organizer_newlines_cannot_add_properties() {
        let slots = make_slots(NaiveTime::from_hms_opt(9, 30, 0).unwrap(), "Standup", "");
        let organizer = Organizer::new("Ada\r\nX-NAME:1", "ada@example.com\nX-INJECTED:1");
        let ics = render(&organizer, &slots, &strict());

        assert!(!ics.replace("\r\n", "").contains('\n'));
        assert!(!ics.replace("\r\n", "").contains('\r'));
        assert!(!ics.lines().any(|l| l.starts_with("X-INJECTED") || l.starts_with("X-NAME")));
        assert!(ics.contains("mailto:ada@example.comX-INJECTED:1"));
    }

    #[test]
    fn strict_escapes_newlines_in_text() {
        let slots = make_slots(NaiveTime::from_hms_opt(9, 30, 0).unwrap(), "a\r\nb", "one\ntwo");
        let ics = render(&organizer(), &slots, &strict());

        assert!(!ics.replace("\r\n", "").contains(['\r', '\n']));
        assert!(ics.contains("SUMMARY:a\\nb (1/1)\r\n"));
        assert!(ics.contains("DESCRIPTION:one\\ntwo (1/1)\r\n"));
    }

    #[test]
    fn strict_folds_long_lines() {
        let long = "word ".repeat(40);
        let slots = make_slots(NaiveTime::from_hms_opt(9, 30, 0).unwrap(), "Standup", &long);
        let ics = render(&organizer(), &slots, &strict());

        assert!(ics.split("\r\n").all(|l| l.len() <= 75));
        assert!(ics.contains("\r\n "));
    }
}
