//! Mock schedule client for testing without API access.
//!
//! Serves canned legs for known origin/destination pairs and counts how
//! often it is queried, which the tests use to verify that leg data is
//! fetched at most once per route per run.

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::error::ScheduleError;
use super::types::Leg;
use super::ScheduleSource;

/// One fixture file: the route it answers for and the legs it serves.
#[derive(Debug, Deserialize)]
struct Fixture {
    from: String,
    to: String,
    legs: Vec<Leg>,
}

/// Mock schedule client backed by an in-memory route map.
#[derive(Debug, Default)]
pub struct MockScheduleClient {
    /// Canned legs, keyed by (from, to).
    routes: HashMap<(String, String), Vec<Leg>>,

    /// When set, every query fails with this status code.
    fail_status: Option<u16>,

    /// Number of `connections` calls served so far.
    fetches: AtomicUsize,
}

impl MockScheduleClient {
    /// Create an empty mock; unknown routes return an API error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose every query fails with the given status.
    pub fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Self::default()
        }
    }

    /// Register canned legs for an origin/destination pair.
    pub fn with_legs(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        legs: Vec<Leg>,
    ) -> Self {
        self.routes.insert((from.into(), to.into()), legs);
        self
    }

    /// Load fixture files from a directory.
    ///
    /// Every `*.json` file must deserialize to `{from, to, legs}`.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let data_dir = data_dir.as_ref();
        let mut routes = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| ScheduleError::ApiError {
            status: 0,
            message: format!("Failed to read fixture directory: {e}"),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ScheduleError::ApiError {
                status: 0,
                message: format!("Failed to read directory entry: {e}"),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let json = std::fs::read_to_string(&path).map_err(|e| ScheduleError::ApiError {
                status: 0,
                message: format!("Failed to read {path:?}: {e}"),
            })?;

            let fixture: Fixture =
                serde_json::from_str(&json).map_err(|e| ScheduleError::Json {
                    message: format!("Failed to parse {path:?}: {e}"),
                    body: None,
                })?;

            routes.insert((fixture.from, fixture.to), fixture.legs);
        }

        if routes.is_empty() {
            return Err(ScheduleError::ApiError {
                status: 0,
                message: format!("No fixture files found in {data_dir:?}"),
            });
        }

        Ok(Self {
            routes,
            fail_status: None,
            fetches: AtomicUsize::new(0),
        })
    }

    /// How many queries this mock has served.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl ScheduleSource for MockScheduleClient {
    async fn connections(
        &self,
        from: &str,
        to: &str,
        _departure: NaiveDateTime,
    ) -> Result<Vec<Leg>, ScheduleError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(status) = self.fail_status {
            return Err(ScheduleError::ApiError {
                status,
                message: "injected failure".to_string(),
            });
        }

        self.routes
            .get(&(from.to_string(), to.to_string()))
            .cloned()
            .ok_or_else(|| ScheduleError::ApiError {
                status: 404,
                message: format!("No fixture for {from} -> {to}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    fn departure() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 23)
            .unwrap()
            .and_hms_opt(6, 50, 0)
            .unwrap()
    }

    fn leg() -> Leg {
        Leg {
            origin: "Karstädt".into(),
            destination: "Berlin Zoologischer Garten".into(),
            departure: "06:50".into(),
            arrival: "08:27".into(),
            line: Some("RE 4162".into()),
            ontime: Some(true),
            canceled: false,
            extra: serde_json::Map::new(),
        }
    }

    #[tokio::test]
    async fn serves_registered_legs() {
        let mock = MockScheduleClient::new().with_legs(
            "Karstädt",
            "Berlin Zoologischer Garten",
            vec![leg()],
        );

        let legs = mock
            .connections("Karstädt", "Berlin Zoologischer Garten", departure())
            .await
            .unwrap();

        assert_eq!(legs, vec![leg()]);
        assert_eq!(mock.fetch_count(), 1);
    }

    #[tokio::test]
    async fn unknown_route_returns_error() {
        let mock = MockScheduleClient::new();
        let result = mock.connections("A", "B", departure()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn failing_mock_fails_every_query() {
        let mock =
            MockScheduleClient::failing(503).with_legs("A", "B", vec![leg()]);

        assert!(mock.connections("A", "B", departure()).await.is_err());
        assert_eq!(mock.fetch_count(), 1);
    }

    #[tokio::test]
    async fn load_fixtures_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("home.json")).unwrap();
        write!(
            file,
            r#"{{
                "from": "Karstädt",
                "to": "Berlin Zoologischer Garten",
                "legs": [
                    {{
                        "origin": "Karstädt",
                        "destination": "Berlin Zoologischer Garten",
                        "departure": "06:50",
                        "arrival": "08:27",
                        "line": "RE 4162",
                        "ontime": true,
                        "canceled": false
                    }}
                ]
            }}"#
        )
        .unwrap();

        let mock = MockScheduleClient::from_dir(dir.path()).unwrap();
        let legs = mock
            .connections("Karstädt", "Berlin Zoologischer Garten", departure())
            .await
            .unwrap();

        assert_eq!(legs, vec![leg()]);
    }

    #[test]
    fn empty_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(MockScheduleClient::from_dir(dir.path()).is_err());
    }
}
