//! Monitor configuration.
//!
//! All values are fixed at startup: the check window around each departure,
//! the send toggle, the message templates, and the mail account. Anything
//! malformed here aborts the run before a single route is evaluated.

/// Errors raised while validating configuration at startup.
///
/// These are the only errors allowed to abort a whole run; everything
/// that happens later is isolated per route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Departure time string is not valid "HH:MM".
    #[error("invalid departure time {given:?}: expected HH:MM")]
    InvalidDepartureTime { given: String },

    /// A station name is empty or whitespace-only.
    #[error("invalid station name for route {route}: must not be empty")]
    EmptyStationName { route: String },

    /// Mail relay address is not in "host:port" form.
    #[error("invalid mail relay address {given:?}: expected host:port")]
    InvalidRelayAddress { given: String },

    /// A body template is missing its table placeholder.
    #[error("{which} template must contain exactly one {{table}} placeholder")]
    MissingTablePlaceholder { which: &'static str },
}

/// The placeholder substituted with the rendered leg table.
pub const TABLE_PLACEHOLDER: &str = "{table}";

/// Subject line and body templates for the notification email.
#[derive(Debug, Clone)]
pub struct MessageTemplates {
    /// Subject line, used verbatim.
    pub subject: String,

    /// Plain-text body containing exactly one `{table}` placeholder.
    pub text: String,

    /// HTML body containing exactly one `{table}` placeholder.
    pub html: String,
}

impl MessageTemplates {
    /// Check that both body templates carry exactly one table placeholder.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (which, body) in [("text", &self.text), ("html", &self.html)] {
            if body.matches(TABLE_PLACEHOLDER).count() != 1 {
                return Err(ConfigError::MissingTablePlaceholder { which });
            }
        }
        Ok(())
    }
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            subject: "DB MONITOR: Verspätung / Ausfall".to_string(),
            text: "\
ACHTUNG: BAHNVERSPÄTUNG

Genaue Daten:

{table}

MfG
Der Monitor"
                .to_string(),
            html: "\
<html><body><p>ACHTUNG: BAHNVERSPÄTUNG</p>
<p>Genaue Daten:</p>
{table}
<p>MfG</p>
<p>Der Monitor</p>
</body></html>"
                .to_string(),
        }
    }
}

/// Mail account and relay settings for the notifier.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP relay in "host:port" form.
    pub relay: String,

    /// Login name for SMTP authentication.
    pub login: String,

    /// Password for SMTP authentication.
    pub password: String,

    /// From address of the notification.
    pub from: String,

    /// To address of the notification.
    pub to: String,
}

impl MailConfig {
    /// Split the relay address into host and port.
    ///
    /// # Examples
    ///
    /// ```
    /// use train_monitor::config::MailConfig;
    ///
    /// let config = MailConfig {
    ///     relay: "smtp.example.org:587".into(),
    ///     login: String::new(),
    ///     password: String::new(),
    ///     from: String::new(),
    ///     to: String::new(),
    /// };
    /// assert_eq!(config.relay_parts().unwrap(), ("smtp.example.org".into(), 587));
    /// ```
    pub fn relay_parts(&self) -> Result<(String, u16), ConfigError> {
        let err = || ConfigError::InvalidRelayAddress {
            given: self.relay.clone(),
        };

        let (host, port) = self.relay.rsplit_once(':').ok_or_else(err)?;
        if host.is_empty() {
            return Err(err());
        }
        let port: u16 = port.parse().map_err(|_| err())?;

        Ok((host.to_string(), port))
    }
}

/// Configuration for one monitoring run.
///
/// Passed into the run controller at construction; nothing here is mutated
/// once the run starts.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// How many minutes before the scheduled departure checking starts.
    pub check_lead_mins: i64,

    /// How many minutes after the scheduled departure checking still runs.
    pub check_tail_mins: i64,

    /// Whether a detected delay actually triggers an email.
    pub send_enabled: bool,

    /// Templates for the notification message.
    pub templates: MessageTemplates,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            check_lead_mins: 120,
            check_tail_mins: 20,
            send_enabled: true,
            templates: MessageTemplates::default(),
        }
    }
}
