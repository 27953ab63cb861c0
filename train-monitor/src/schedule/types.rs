//! Schedule API response DTOs.
//!
//! These types map directly to the connection-search JSON responses.
//! Status fields use `Option` because the source omits them when the
//! live data is not yet known. Descriptive fields beyond the known ones
//! are kept, in their original order, for display.

use serde::Deserialize;
use serde_json::{Map, Value};

/// One leg of a reported connection.
///
/// Besides the descriptive fields there are two status fields: `ontime`
/// is tri-state (the source may not know yet), `canceled` is plain bool
/// and defaults to false when omitted. Any additional fields the source
/// reports (platform, price, ...) land in `extra` in document order;
/// `serde_json`'s `preserve_order` feature keeps that order stable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Leg {
    /// Departure station of this leg.
    pub origin: String,

    /// Arrival station of this leg.
    pub destination: String,

    /// Scheduled departure time, "HH:MM".
    pub departure: String,

    /// Scheduled arrival time, "HH:MM".
    pub arrival: String,

    /// Line or train identifier (e.g. "RE 4162"), if reported.
    pub line: Option<String>,

    /// Live on-time flag. `None` means the source has no estimate yet.
    #[serde(default)]
    pub ontime: Option<bool>,

    /// Whether this leg is canceled.
    #[serde(default)]
    pub canceled: bool,

    /// Additional descriptive fields, in their original order.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Leg {
    /// Display fields every leg carries, in table order.
    const FIXED_FIELDS: [&'static str; 7] = [
        "origin",
        "destination",
        "departure",
        "arrival",
        "line",
        "ontime",
        "canceled",
    ];

    /// Display field names for this record: the fixed fields followed by
    /// any additional fields in their original order.
    pub fn field_names(&self) -> Vec<&str> {
        Self::FIXED_FIELDS
            .into_iter()
            .chain(self.extra.keys().map(String::as_str))
            .collect()
    }

    /// Display field values, matching [`Leg::field_names`] in order.
    pub fn field_values(&self) -> Vec<String> {
        let mut values = vec![
            self.origin.clone(),
            self.destination.clone(),
            self.departure.clone(),
            self.arrival.clone(),
            self.line.clone().unwrap_or_default(),
            match self.ontime {
                Some(true) => "ja".to_string(),
                Some(false) => "nein".to_string(),
                None => "unbekannt".to_string(),
            },
            if self.canceled { "ja" } else { "nein" }.to_string(),
        ];
        values.extend(self.extra.values().map(display_value));
        values
    }
}

/// Render a JSON value for a table cell; strings lose their quotes.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_leg() {
        let json = r#"{
            "origin": "Karstädt",
            "destination": "Berlin Zoologischer Garten",
            "departure": "06:50",
            "arrival": "08:27",
            "line": "RE 4162",
            "ontime": true,
            "canceled": false
        }"#;

        let leg: Leg = serde_json::from_str(json).unwrap();

        assert_eq!(leg.origin, "Karstädt");
        assert_eq!(leg.destination, "Berlin Zoologischer Garten");
        assert_eq!(leg.departure, "06:50");
        assert_eq!(leg.arrival, "08:27");
        assert_eq!(leg.line.as_deref(), Some("RE 4162"));
        assert_eq!(leg.ontime, Some(true));
        assert!(!leg.canceled);
        assert!(leg.extra.is_empty());
    }

    #[test]
    fn deserialize_leg_without_status() {
        // The source omits status fields when live data is unavailable.
        let json = r#"{
            "origin": "Karstädt",
            "destination": "Wittenberge",
            "departure": "06:50",
            "arrival": "07:02"
        }"#;

        let leg: Leg = serde_json::from_str(json).unwrap();

        assert_eq!(leg.ontime, None);
        assert!(!leg.canceled);
        assert!(leg.line.is_none());
    }

    #[test]
    fn deserialize_canceled_leg() {
        let json = r#"{
            "origin": "Wittenberge",
            "destination": "Berlin Zoologischer Garten",
            "departure": "07:10",
            "arrival": "08:27",
            "line": "IC 2071",
            "ontime": false,
            "canceled": true
        }"#;

        let leg: Leg = serde_json::from_str(json).unwrap();

        assert_eq!(leg.ontime, Some(false));
        assert!(leg.canceled);
    }

    #[test]
    fn extra_fields_survive_in_document_order() {
        let json = r#"{
            "origin": "Karstädt",
            "destination": "Berlin Zoologischer Garten",
            "departure": "06:50",
            "platform": "3",
            "arrival": "08:27",
            "ontime": true,
            "price": 19.9,
            "canceled": false
        }"#;

        let leg: Leg = serde_json::from_str(json).unwrap();

        let keys: Vec<&String> = leg.extra.keys().collect();
        assert_eq!(keys, ["platform", "price"]);

        let names = leg.field_names();
        assert_eq!(&names[names.len() - 2..], ["platform", "price"]);

        let values = leg.field_values();
        assert_eq!(values.len(), names.len());
        assert_eq!(&values[values.len() - 2..], ["3", "19.9"]);
    }

    #[test]
    fn field_values_match_field_names() {
        let leg = Leg {
            origin: "A".into(),
            destination: "B".into(),
            departure: "10:00".into(),
            arrival: "11:00".into(),
            line: None,
            ontime: None,
            canceled: true,
            extra: Map::new(),
        };

        let values = leg.field_values();
        assert_eq!(values.len(), leg.field_names().len());
        assert_eq!(values[4], ""); // missing line renders empty
        assert_eq!(values[5], "unbekannt");
        assert_eq!(values[6], "ja");
    }
}
