use tracing_subscriber::EnvFilter;

use train_monitor::config::{MailConfig, MonitorConfig};
use train_monitor::monitor::Monitor;
use train_monitor::notify::SmtpNotifier;
use train_monitor::route::Route;
use train_monitor::schedule::{ScheduleClient, ScheduleConfig};

/// Station at the home end of the commute.
const HOME_STATION: &str = "Karstädt";

/// Station at the work end of the commute.
const WORK_STATION: &str = "Berlin Zoologischer Garten";

/// Scheduled departure of the morning train, home to work.
const DEPARTURE_FROM_HOME: &str = "06:50";

/// Scheduled departure of the evening train, work to home.
const DEPARTURE_FROM_WORK: &str = "17:31";

/// Default SMTP relay for notifications.
const DEFAULT_SMTP_RELAY: &str = "smtp.strato.de:587";

fn env_or_warn(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| {
        eprintln!("Warning: {name} not set. Mail delivery will fail.");
        String::new()
    })
}

fn send_enabled_from_env() -> bool {
    match std::env::var("MONITOR_SEND_MAIL") {
        Ok(value) => !matches!(value.as_str(), "0" | "false" | "off"),
        Err(_) => true,
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Fixed configuration; anything malformed aborts before the first route.
    let config = MonitorConfig {
        send_enabled: send_enabled_from_env(),
        ..MonitorConfig::default()
    };
    config
        .templates
        .validate()
        .expect("Invalid message templates");

    let routes = vec![
        Route::new("HOME", HOME_STATION, WORK_STATION, DEPARTURE_FROM_HOME)
            .expect("Invalid HOME route"),
        Route::new("WORK", WORK_STATION, HOME_STATION, DEPARTURE_FROM_WORK)
            .expect("Invalid WORK route"),
    ];

    let schedule =
        ScheduleClient::new(ScheduleConfig::new()).expect("Failed to create schedule client");

    let login = env_or_warn("MONITOR_SMTP_LOGIN");
    let mail = MailConfig {
        relay: std::env::var("MONITOR_SMTP_RELAY")
            .unwrap_or_else(|_| DEFAULT_SMTP_RELAY.to_string()),
        password: env_or_warn("MONITOR_SMTP_PASSWORD"),
        from: std::env::var("MONITOR_MAIL_FROM").unwrap_or_else(|_| login.clone()),
        to: std::env::var("MONITOR_MAIL_TO").unwrap_or_else(|_| login.clone()),
        login,
    };
    let notifier = SmtpNotifier::new(&mail).expect("Invalid mail configuration");

    // One pass over all routes; outcomes are reported as log lines.
    let monitor = Monitor::new(config, routes, schedule, notifier);
    monitor.run().await;
}
