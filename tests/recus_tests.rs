use chrono::{NaiveDate, NaiveTime};

use pickleball_checker::recus::RecUs;

fn load_sample() -> String {
    std::fs::read_to_string("tests/sample_response.json")
        .expect("failed to read sample_response.json")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn parses_well_formed_entries_and_drops_malformed_ones() {
    let json = load_sample();
    let slots = RecUs::slots_from_json(&json, "Buena Vista").expect("slots_from_json failed");

    // s1..s4 and s7 are well-formed; s5 (bad timestamp), s6 (zero-length) and
    // s8 (crosses midnight) are dropped
    assert_eq!(slots.len(), 5, "slots were: {:?}", slots);
    assert!(slots.iter().all(|s| s.court_id == "Buena Vista"));
    assert!(slots.iter().all(|s| s.start_time < s.end_time));
}

#[test]
fn drops_entries_crossing_midnight() {
    let json = load_sample();
    let slots = RecUs::slots_from_json(&json, "Buena Vista").expect("slots_from_json failed");

    // s8 runs 23:00 into 00:30 the next day; flattening it would invert the
    // start_time < end_time invariant, so the boundary rejects it
    assert!(
        slots.iter().all(|s| s.start_time != time(23, 0)),
        "slots were: {:?}",
        slots
    );
    assert!(slots.iter().all(|s| s.start_time < s.end_time));
}

#[test]
fn keeps_venue_local_times_from_offset_timestamps() {
    let json = load_sample();
    let slots = RecUs::slots_from_json(&json, "Buena Vista").expect("slots_from_json failed");

    let s1 = &slots[0];
    assert_eq!(s1.date, date(2025, 9, 23));
    assert_eq!(s1.start_time, time(18, 0));
    assert_eq!(s1.end_time, time(19, 0));
    assert!(s1.is_available);
}

#[test]
fn converts_utc_timestamps_to_pacific() {
    let json = load_sample();
    let slots = RecUs::slots_from_json(&json, "Buena Vista").expect("slots_from_json failed");

    // s7: 2025-09-28T02:00:00Z is 2025-09-27 19:00 PDT, a Saturday evening
    let s7 = slots.last().expect("expected at least one slot");
    assert_eq!(s7.date, date(2025, 9, 27));
    assert_eq!(s7.start_time, time(19, 0));
    assert_eq!(s7.end_time, time(20, 30));
}

#[test]
fn availability_flag_carries_through() {
    let json = load_sample();
    let slots = RecUs::slots_from_json(&json, "Buena Vista").expect("slots_from_json failed");

    // s4 is reported unavailable and must survive parsing as such;
    // the filter decides what to do with it, not the fetcher
    let unavailable: Vec<_> = slots.iter().filter(|s| !s.is_available).collect();
    assert_eq!(unavailable.len(), 1);
    assert_eq!(unavailable[0].start_time, time(19, 0));
}

#[test]
fn unparseable_document_is_a_fetch_error() {
    let err = RecUs::slots_from_json("not a json document", "Buena Vista").unwrap_err();
    assert!(err.0.contains("Buena Vista"), "error was: {}", err);
}
