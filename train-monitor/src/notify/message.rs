//! Notification message assembly.

use crate::config::{MessageTemplates, TABLE_PLACEHOLDER};
use crate::schedule::Leg;

use super::table;

/// A fully formatted notification, ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayMessage {
    /// Subject line.
    pub subject: String,

    /// Plain-text body.
    pub text: String,

    /// HTML body.
    pub html: String,
}

/// Build the notification for a delayed or canceled route.
///
/// The header row is taken from the first leg record, so descriptive
/// fields beyond the fixed ones keep their original order. The legs are
/// rendered once as a fixed-width grid and once as an HTML table, each
/// substituted for the template's table placeholder verbatim.
///
/// # Panics
///
/// Panics when called with an empty leg list; use
/// [`build_no_data_message`] when the schedule source reported nothing.
pub fn build_message(legs: &[Leg], templates: &MessageTemplates) -> DelayMessage {
    assert!(!legs.is_empty(), "formatter requires at least one leg");

    let headers = legs[0].field_names();
    let rows: Vec<Vec<String>> = legs.iter().map(Leg::field_values).collect();

    DelayMessage {
        subject: templates.subject.clone(),
        text: templates
            .text
            .replace(TABLE_PLACEHOLDER, &table::grid(&headers, &rows)),
        html: templates
            .html
            .replace(TABLE_PLACEHOLDER, &table::html(&headers, &rows)),
    }
}

/// Build the notification for a route with no schedule data at all.
///
/// A fetch failure or empty answer still counts as "not on time", so an
/// alert goes out; there is just no table to show.
pub fn build_no_data_message(templates: &MessageTemplates) -> DelayMessage {
    DelayMessage {
        subject: templates.subject.clone(),
        text: templates
            .text
            .replace(TABLE_PLACEHOLDER, "Keine Verbindungsdaten verfügbar."),
        html: templates.html.replace(
            TABLE_PLACEHOLDER,
            "<p>Keine Verbindungsdaten verfügbar.</p>",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};

    fn legs() -> Vec<Leg> {
        vec![
            Leg {
                origin: "Karstädt".into(),
                destination: "Wittenberge".into(),
                departure: "06:50".into(),
                arrival: "07:02".into(),
                line: Some("RB 17".into()),
                ontime: Some(true),
                canceled: false,
                extra: Map::new(),
            },
            Leg {
                origin: "Wittenberge".into(),
                destination: "Berlin Zoologischer Garten".into(),
                departure: "07:10".into(),
                arrival: "08:27".into(),
                line: Some("IC 2071".into()),
                ontime: Some(false),
                canceled: false,
                extra: Map::new(),
            },
        ]
    }

    #[test]
    fn both_bodies_contain_every_field_value_once() {
        let msg = build_message(&legs(), &MessageTemplates::default());

        for value in ["Karstädt", "07:02", "RB 17", "IC 2071", "08:27", "07:10"] {
            assert_eq!(msg.text.matches(value).count(), 1, "text: {value}");
            assert_eq!(msg.html.matches(value).count(), 1, "html: {value}");
        }
    }

    #[test]
    fn table_substituted_into_template_verbatim() {
        let templates = MessageTemplates {
            subject: "ALERT".into(),
            text: "before\n{table}\nafter".into(),
            html: "<body>{table}</body>".into(),
        };

        let legs = legs();
        let headers = legs[0].field_names();
        let rows: Vec<Vec<String>> = legs.iter().map(Leg::field_values).collect();
        let grid = table::grid(&headers, &rows);
        let html = table::html(&headers, &rows);

        let msg = build_message(&legs, &templates);

        assert_eq!(msg.subject, "ALERT");
        assert_eq!(msg.text, format!("before\n{grid}\nafter"));
        assert_eq!(msg.html, format!("<body>{html}</body>"));
    }

    #[test]
    fn header_row_comes_from_first_leg() {
        let msg = build_message(&legs(), &MessageTemplates::default());

        for name in legs()[0].field_names() {
            assert!(msg.text.contains(name), "missing header {name}");
            assert!(msg.html.contains(&format!("<th>{name}</th>")));
        }
    }

    #[test]
    fn extra_fields_survive_into_both_bodies() {
        let mut leg = legs().remove(0);
        leg.extra
            .insert("platform".into(), Value::String("3 A/B".into()));

        let msg = build_message(&[leg], &MessageTemplates::default());

        assert_eq!(msg.text.matches("platform").count(), 1);
        assert_eq!(msg.text.matches("3 A/B").count(), 1);
        assert!(msg.html.contains("<th>platform</th>"));
        assert!(msg.html.contains("<td>3 A/B</td>"));
    }

    #[test]
    #[should_panic(expected = "at least one leg")]
    fn formatter_rejects_empty_legs() {
        build_message(&[], &MessageTemplates::default());
    }

    #[test]
    fn no_data_message_has_no_table() {
        let msg = build_no_data_message(&MessageTemplates::default());

        assert!(msg.text.contains("Keine Verbindungsdaten"));
        assert!(msg.html.contains("Keine Verbindungsdaten"));
        assert!(!msg.text.contains("{table}"));
        assert!(!msg.html.contains("<table>"));
    }
}
