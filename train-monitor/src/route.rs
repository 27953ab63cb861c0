//! Monitored route type.
//!
//! A `Route` is one configured origin→destination connection with a
//! scheduled departure time of day. The departure is a wall-clock time,
//! not a datetime: each run re-anchors it to the current calendar date.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::ConfigError;

/// One monitored connection.
///
/// The departure time string is parsed eagerly at construction, so any
/// `Route` value carries a valid time of day.
///
/// # Examples
///
/// ```
/// use train_monitor::route::Route;
/// use chrono::NaiveDate;
///
/// let route = Route::new("WORK", "Berlin Zoologischer Garten", "Karstädt", "17:31").unwrap();
/// let date = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
/// assert_eq!(route.departure_on(date).to_string(), "2026-08-23 17:31:00");
///
/// // Malformed times fail at construction, not at first use.
/// assert!(Route::new("WORK", "A", "B", "25:00").is_err());
/// assert!(Route::new("WORK", "A", "B", "1731").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Route {
    /// Short label used in log lines (e.g. "HOME", "WORK").
    pub label: String,

    /// Departure station name.
    pub origin: String,

    /// Arrival station name.
    pub destination: String,

    /// Scheduled departure time of day.
    pub departure: NaiveTime,
}

impl Route {
    /// Construct a route, parsing the "HH:MM" departure time.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the departure string is not a valid "HH:MM" time
    /// or if either station name is empty.
    pub fn new(
        label: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure: &str,
    ) -> Result<Self, ConfigError> {
        let label = label.into();
        let origin = origin.into();
        let destination = destination.into();

        if origin.trim().is_empty() || destination.trim().is_empty() {
            return Err(ConfigError::EmptyStationName {
                route: label.clone(),
            });
        }

        let departure = parse_departure_time(departure)?;

        Ok(Self {
            label,
            origin,
            destination,
            departure,
        })
    }

    /// The scheduled departure re-anchored to the given calendar date.
    pub fn departure_on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.departure)
    }
}

/// Parse a departure time in "HH:MM" format.
pub fn parse_departure_time(s: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| ConfigError::InvalidDepartureTime {
        given: s.to_string(),
    })
}
