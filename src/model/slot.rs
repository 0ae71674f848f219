use chrono::{NaiveDate, NaiveTime};

/// A single bookable court interval, local to the venue.
/// Produced by the fetcher and immutable afterwards; `start_time < end_time`
/// is guaranteed at the fetcher boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    pub court_id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
}
