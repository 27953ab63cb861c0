//! Schedule source client.
//!
//! This module talks to the external connection-search API that reports,
//! for an origin/destination pair and a departure time, the matching
//! connection legs with their live on-time and cancellation status.
//!
//! The source is treated as a black box: no retries, no timeout tuning
//! beyond a request timeout, and a failure to answer degrades to "no legs
//! known" at the caller.

mod client;
mod error;
mod mock;
mod types;

pub use client::{ScheduleClient, ScheduleConfig};
pub use error::ScheduleError;
pub use mock::MockScheduleClient;
pub use types::Leg;

use chrono::NaiveDateTime;

/// A source of live connection data.
///
/// The seam between the run controller and the schedule API; the mock
/// client implements it for tests.
pub trait ScheduleSource {
    /// Query connection legs for a departure at the given time.
    fn connections(
        &self,
        from: &str,
        to: &str,
        departure: NaiveDateTime,
    ) -> impl std::future::Future<Output = Result<Vec<Leg>, ScheduleError>>;
}
