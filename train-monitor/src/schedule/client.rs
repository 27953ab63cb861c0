//! Schedule HTTP client.
//!
//! Queries a connection-search endpoint for legs between two stations
//! around a departure time. One request per query, no retries.

use chrono::NaiveDateTime;

use super::error::ScheduleError;
use super::types::Leg;
use super::ScheduleSource;

/// Default base URL for the connection-search API.
const DEFAULT_BASE_URL: &str = "https://v6.db.transport.rest";

/// Configuration for the schedule client.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ScheduleConfig {
    /// Create a config with the default production endpoint.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Connection-search API client.
#[derive(Debug, Clone)]
pub struct ScheduleClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScheduleClient {
    /// Create a new schedule client with the given configuration.
    pub fn new(config: ScheduleConfig) -> Result<Self, ScheduleError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    async fn fetch_connections(
        &self,
        from: &str,
        to: &str,
        departure: NaiveDateTime,
    ) -> Result<Vec<Leg>, ScheduleError> {
        let url = format!("{}/connections", self.base_url);
        let when = departure.format("%Y-%m-%dT%H:%M").to_string();

        let response = self
            .http
            .get(&url)
            .query(&[("from", from), ("to", to), ("departure", when.as_str())])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ScheduleError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ScheduleError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScheduleError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ScheduleError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl ScheduleSource for ScheduleClient {
    async fn connections(
        &self,
        from: &str,
        to: &str,
        departure: NaiveDateTime,
    ) -> Result<Vec<Leg>, ScheduleError> {
        self.fetch_connections(from, to, departure).await
    }
}
