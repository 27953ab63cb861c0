//! On-time verdict over a route's legs.
//!
//! Leg data is fetched at most once per route per run and then held in an
//! explicit two-state cache. A fetch failure degrades to "no legs known",
//! which the verdict maps to "not on time": a data-source outage must never
//! silently suppress a delay alert, even at the cost of a false positive.

use tracing::warn;

use crate::route::Route;
use crate::schedule::{Leg, ScheduleSource};

/// Leg data for one route within one run.
///
/// Starts `Unfetched` and moves to `Fetched` exactly once; repeated
/// lookups never query the schedule source again.
#[derive(Debug, Clone, PartialEq)]
pub enum LegCache {
    /// No query made yet.
    Unfetched,

    /// Result of the single query, possibly empty.
    Fetched(Vec<Leg>),
}

impl LegCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        LegCache::Unfetched
    }

    /// Return the legs, querying the schedule source on first use only.
    ///
    /// A query failure is logged and cached as an empty leg list, so the
    /// caller sees "no legs known" rather than an error.
    pub async fn fetch<S: ScheduleSource>(
        &mut self,
        source: &S,
        route: &Route,
        departure: chrono::NaiveDateTime,
    ) -> &[Leg] {
        if matches!(self, LegCache::Unfetched) {
            let legs = match source
                .connections(&route.origin, &route.destination, departure)
                .await
            {
                Ok(legs) => legs,
                Err(e) => {
                    warn!(route = %route.label, error = %e, "schedule fetch failed, treating as no legs known");
                    Vec::new()
                }
            };
            *self = LegCache::Fetched(legs);
        }

        match self {
            LegCache::Fetched(legs) => legs,
            // Populated just above.
            LegCache::Unfetched => &[],
        }
    }

    /// The cached legs, if a fetch has happened.
    pub fn legs(&self) -> Option<&[Leg]> {
        match self {
            LegCache::Unfetched => None,
            LegCache::Fetched(legs) => Some(legs),
        }
    }
}

impl Default for LegCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a route is on time, given all its legs.
///
/// An empty leg list is "not on time". A non-empty list is on time iff
/// every leg is neither explicitly marked late nor canceled; a leg whose
/// on-time flag is unknown counts as on time unless it is canceled. The
/// two rules are deliberately asymmetric.
pub fn is_on_time(legs: &[Leg]) -> bool {
    !legs.is_empty() && legs.iter().all(leg_on_time)
}

fn leg_on_time(leg: &Leg) -> bool {
    leg.ontime != Some(false) && !leg.canceled
}
