//! CSV rendering.

use crate::config::Organizer;
use crate::slot::TimeSlot;
use crate::text::{csv_quote, local_timestamp};

const HEADER: [&str; 6] = [
    "start",
    "end",
    "summary",
    "description",
    "organizer name",
    "organizer email",
];

/// Render one header row plus one row per slot, newline-separated with no
/// trailing newline. Text fields are always quoted; times are not.
pub fn render(organizer: &Organizer, slots: &[TimeSlot]) -> String {
    let name = csv_quote(&organizer.name);
    let email = csv_quote(&organizer.email);

    let mut rows = Vec::with_capacity(slots.len() + 1);
    rows.push(HEADER.join(","));

    for slot in slots {
        rows.push(
            [
                local_timestamp(&slot.start),
                local_timestamp(&slot.end),
                csv_quote(&slot.summary),
                csv_quote(&slot.description),
                name.clone(),
                email.clone(),
            ]
            .join(","),
        );
    }

    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::slot::generate;
    use chrono::{NaiveDate, NaiveTime};

    fn slots(end: NaiveTime, description: &str) -> Vec<TimeSlot> {
        let config = Configuration::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end,
            1800,
        )
        .with_text("Standup", description);
        generate(&config)
    }

    #[test]
    fn renders_header_and_rows() {
        let organizer = Organizer::new("Ada", "ada@example.com");
        let csv = render(&organizer, &slots(NaiveTime::from_hms_opt(10, 0, 0).unwrap(), "Sync"));

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "start,end,summary,description,organizer name,organizer email");
        assert_eq!(
            lines[1],
            r#"2024-01-01T09:00:00,2024-01-01T09:29:59,"Standup (1/2)","Sync (1/2)","Ada","ada@example.com""#
        );
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn doubles_embedded_quotes() {
        let csv = render(
            &Organizer::default(),
            &slots(NaiveTime::from_hms_opt(9, 30, 0).unwrap(), r#"He said "hi""#),
        );
        assert!(csv.contains(r#""He said ""hi"" (1/1)""#), "{}", csv);
    }

    #[test]
    fn empty_organizer_renders_empty_quotes() {
        let slots = slots(NaiveTime::from_hms_opt(9, 30, 0).unwrap(), "");
        let csv = render(&Organizer::default(), &slots);
        assert!(csv.lines().nth(1).unwrap().ends_with(r#","","""#));
    }

    #[test]
    fn no_slots_is_header_only() {
        let csv = render(&Organizer::default(), &[]);
        assert_eq!(csv, "start,end,summary,description,organizer name,organizer email");
    }
}
