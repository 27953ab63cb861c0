//! Check-window evaluation.
//!
//! A route is only checked shortly before (and briefly after) its scheduled
//! departure. The window is derived from the departure at evaluation time,
//! never stored.

use chrono::{Duration, NaiveDateTime};
use tracing::debug;

/// Whether `now` falls inside the check window around `departure`.
///
/// The window is `(departure - lead_mins, departure + tail_mins)`, open on
/// both ends: hitting a boundary exactly is outside the window.
///
/// # Examples
///
/// ```
/// use train_monitor::window::in_check_window;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
/// let departure = date.and_hms_opt(17, 31, 0).unwrap();
///
/// assert!(in_check_window(departure, date.and_hms_opt(15, 35, 0).unwrap(), 120, 20));
/// assert!(!in_check_window(departure, date.and_hms_opt(15, 0, 0).unwrap(), 120, 20));
/// ```
pub fn in_check_window(
    departure: NaiveDateTime,
    now: NaiveDateTime,
    lead_mins: i64,
    tail_mins: i64,
) -> bool {
    let begin = departure - Duration::minutes(lead_mins);
    let end = departure + Duration::minutes(tail_mins);

    debug!(%begin, %end, %now, "check window");

    begin < now && now < end
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 23)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn inside_lead_window() {
        // Departure 17:31, now 15:35: 116 minutes before, within the lead.
        assert!(in_check_window(at(17, 31), at(15, 35), 120, 20));
    }

    #[test]
    fn outside_lead_window() {
        // Departure 17:31, now 15:00: 151 minutes before, outside the lead.
        assert!(!in_check_window(at(17, 31), at(15, 0), 120, 20));
    }

    #[test]
    fn inside_tail_window() {
        assert!(in_check_window(at(17, 31), at(17, 45), 120, 20));
    }

    #[test]
    fn outside_tail_window() {
        assert!(!in_check_window(at(17, 31), at(18, 0), 120, 20));
    }

    #[test]
    fn boundaries_are_excluded() {
        // Exactly lead_mins before and tail_mins after are both outside.
        assert!(!in_check_window(at(17, 31), at(15, 31), 120, 20));
        assert!(!in_check_window(at(17, 31), at(17, 51), 120, 20));
    }

    #[test]
    fn departure_instant_is_inside() {
        assert!(in_check_window(at(17, 31), at(17, 31), 120, 20));
    }
}
