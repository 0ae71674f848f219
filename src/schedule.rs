use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike, Weekday};

use crate::model::slot::Slot;

/// Weekdays worth checking for an evening game.
pub const ELIGIBLE_WEEKDAYS: [Weekday; 4] =
    [Weekday::Tue, Weekday::Thu, Weekday::Sat, Weekday::Sun];

/// Eligible evening window, seconds since midnight, half-open [18:00, 20:00).
const WINDOW_START_SEC: u32 = 18 * 3600;
const WINDOW_END_SEC: u32 = 20 * 3600;

/// How far ahead to look when picking target dates to fetch. Seven days covers
/// exactly one occurrence of each eligible weekday.
pub const LOOKAHEAD_DAYS: i64 = 7;

/// Whether `[start, end)` intersects the eligible evening window on an eligible
/// weekday. Half-open overlap: `[a,b)` and `[c,d)` intersect iff `a < d && c < b`,
/// so a partially-overlapping slot (even by seconds) qualifies and a zero-length
/// slot never does.
pub fn is_eligible_window(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> bool {
    if !ELIGIBLE_WEEKDAYS.contains(&date.weekday()) {
        return false;
    }
    start.num_seconds_from_midnight() < WINDOW_END_SEC
        && WINDOW_START_SEC < end.num_seconds_from_midnight()
}

/// Select the slots that are available and fall inside the eligible window.
/// Stable: output preserves input relative order. Duplicates are kept; the
/// filter never deduplicates and never errors.
pub fn filter_eligible(slots: Vec<Slot>) -> Vec<Slot> {
    slots
        .into_iter()
        .filter(|s| s.is_available && is_eligible_window(s.date, s.start_time, s.end_time))
        .collect()
}

/// The next occurrence of each eligible weekday within `horizon_days` of `today`,
/// today included, in ascending order. Pure date arithmetic, no clock access.
pub fn upcoming_eligible_dates(today: NaiveDate, horizon_days: i64) -> Vec<NaiveDate> {
    (0..horizon_days)
        .map(|offset| today + Duration::days(offset))
        .filter(|d| ELIGIBLE_WEEKDAYS.contains(&d.weekday()))
        .collect()
}
