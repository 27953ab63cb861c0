//! Schedule client error types.

use std::fmt;

/// Errors from the schedule HTTP client.
#[derive(Debug)]
pub enum ScheduleError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// Rate limited by the API
    RateLimited,

    /// Invalid credentials or unauthorized
    Unauthorized,
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::Http(e) => write!(f, "HTTP error: {e}"),
            ScheduleError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            ScheduleError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            ScheduleError::RateLimited => write!(f, "rate limited by schedule API"),
            ScheduleError::Unauthorized => write!(f, "unauthorized (invalid credentials)"),
        }
    }
}

impl std::error::Error for ScheduleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScheduleError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ScheduleError {
    fn from(err: reqwest::Error) -> Self {
        ScheduleError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ScheduleError::ApiError {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        let err = ScheduleError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("<html>"));

        let err = ScheduleError::RateLimited;
        assert_eq!(err.to_string(), "rate limited by schedule API");
    }
}
