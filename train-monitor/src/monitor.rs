//! Run controller.
//!
//! One pass over the fixed route list per process invocation. Routes are
//! independent: a fetch or delivery failure on one route is logged and
//! never aborts the others. Steps per route, strictly in order: window
//! check, verdict, formatting, delivery.

use chrono::{Local, NaiveDateTime};
use tracing::{error, info};

use crate::config::MonitorConfig;
use crate::notify::{DelayMessage, Notify, build_message, build_no_data_message};
use crate::route::Route;
use crate::schedule::ScheduleSource;
use crate::status::{LegCache, is_on_time};
use crate::window::in_check_window;

/// What happened to the notification for a delayed route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Sent successfully.
    Sent,

    /// Sending is disabled by configuration.
    Suppressed,

    /// One delivery attempt failed; not retried.
    Failed(String),
}

/// Terminal state of one route for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Now is outside the check window; nothing was fetched.
    NotInWindow,

    /// All legs on time, nothing to report.
    OnTime,

    /// Delay, cancellation, or missing data; a message was built.
    Delayed {
        message: DelayMessage,
        delivery: Delivery,
    },
}

/// Outcome of one route, labelled for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteReport {
    pub label: String,
    pub outcome: RouteOutcome,
}

/// The run controller.
///
/// Owns the immutable configuration and the fixed, ordered route list;
/// drives the per-route check/notify sequence once per [`Monitor::run`].
pub struct Monitor<S, N> {
    config: MonitorConfig,
    routes: Vec<Route>,
    schedule: S,
    notifier: N,
}

impl<S: ScheduleSource, N: Notify> Monitor<S, N> {
    /// Create a monitor over the given routes.
    pub fn new(config: MonitorConfig, routes: Vec<Route>, schedule: S, notifier: N) -> Self {
        Self {
            config,
            routes,
            schedule,
            notifier,
        }
    }

    /// Evaluate every route once, against the current wall-clock time.
    pub async fn run(&self) -> Vec<RouteReport> {
        self.run_at(Local::now().naive_local()).await
    }

    /// Evaluate every route once, against the given time.
    pub async fn run_at(&self, now: NaiveDateTime) -> Vec<RouteReport> {
        let mut reports = Vec::with_capacity(self.routes.len());

        for route in &self.routes {
            let outcome = self.check_route(route, now).await;

            match &outcome {
                RouteOutcome::NotInWindow => {
                    info!(route = %route.label, "not in check window");
                }
                RouteOutcome::OnTime => {
                    info!(route = %route.label, "all trains on time");
                }
                RouteOutcome::Delayed { delivery, .. } => match delivery {
                    Delivery::Sent => {
                        info!(route = %route.label, "delay detected, notification sent");
                    }
                    Delivery::Suppressed => {
                        info!(route = %route.label, "delay detected, sending disabled");
                    }
                    Delivery::Failed(reason) => {
                        error!(route = %route.label, %reason, "delay detected, delivery failed");
                    }
                },
            }

            reports.push(RouteReport {
                label: route.label.clone(),
                outcome,
            });
        }

        reports
    }

    async fn check_route(&self, route: &Route, now: NaiveDateTime) -> RouteOutcome {
        // The configured departure is a time of day, re-anchored to today.
        let departure = route.departure_on(now.date());

        if !in_check_window(
            departure,
            now,
            self.config.check_lead_mins,
            self.config.check_tail_mins,
        ) {
            return RouteOutcome::NotInWindow;
        }

        let mut cache = LegCache::new();
        let legs = cache.fetch(&self.schedule, route, departure).await;

        if is_on_time(legs) {
            return RouteOutcome::OnTime;
        }

        // The message is built before the send toggle is consulted, so a
        // suppressed notification can still be inspected and logged.
        let message = if legs.is_empty() {
            build_no_data_message(&self.config.templates)
        } else {
            build_message(legs, &self.config.templates)
        };

        let delivery = if self.config.send_enabled {
            match self.notifier.send(&message).await {
                Ok(()) => Delivery::Sent,
                Err(e) => Delivery::Failed(e.to_string()),
            }
        } else {
            Delivery::Suppressed
        };

        RouteOutcome::Delayed { message, delivery }
    }
}
