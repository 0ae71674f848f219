use std::collections::HashSet;

use chrono::NaiveDate;
use chrono_tz::America::Los_Angeles;
use tracing::{error, info, info_span, instrument, warn};

use crate::error::FetchError;
use crate::handler::SlotSource;
use crate::model::court::Court;
use crate::model::feed::{AvailabilityDocument, Included};
use crate::model::slot::Slot;

const API_BASE: &str = "https://api.rec.us/v1";

/// Client for the rec.us availability feed.
///
/// The feed has a stable JSON structure, so slots are parsed directly instead of
/// going through the AI-assisted page-extraction collaborator; that collaborator
/// remains the fallback for venues without a structured feed and is outside this
/// client.
#[derive(Debug)]
pub struct RecUs {
    courts: Vec<Court>,
}

impl RecUs {
    pub fn new(courts: Vec<Court>) -> Self {
        Self { courts }
    }

    /// Fetch and parse the availability document for one court over the date range.
    #[instrument(level = "info", skip(self, dates), fields(court = %court.name))]
    fn fetch_court_slots(&self, court: &Court, dates: &[NaiveDate]) -> Result<Vec<Slot>, FetchError> {
        let (Some(first), Some(last)) = (dates.first(), dates.last()) else {
            return Ok(Vec::new());
        };
        let url = format!("{}/locations/{}/slots?start={}&end={}", API_BASE, court.slug, first, last);
        let response_result = {
            let _span = info_span!("recus_fetch", url = %url).entered();
            ureq::get(&url).call()
        };
        let response = response_result.map_err(|e| {
            error!(error = %e, url = %url, "Availability request failed");
            FetchError(format!("request failed for {}: {}", court.name, e))
        })?;
        let mut body_reader = response.into_body();
        let body = body_reader.read_to_string().map_err(|e| {
            error!(error = %e, "Failed to read response body");
            FetchError(format!("failed to read body for {}: {}", court.name, e))
        })?;
        Self::slots_from_json(&body, court.name)
    }

    /// Parse a raw feed document into slots for the named court (no network).
    pub fn slots_from_json(body: &str, court_name: &str) -> Result<Vec<Slot>, FetchError> {
        let doc = serde_json::from_str::<AvailabilityDocument>(body).map_err(|e| {
            error!(error = %e, court = %court_name, "Failed to deserialize availability document");
            FetchError(format!("unparseable feed for {}: {}", court_name, e))
        })?;
        Ok(Self::slots_from_document(doc, court_name))
    }

    /// Convert feed entries to venue-local slots, dropping malformed ones.
    /// Entries with unparseable timestamps or `start >= end` are skipped here so
    /// that downstream filtering only ever sees well-formed slots.
    fn slots_from_document(doc: AvailabilityDocument, court_name: &str) -> Vec<Slot> {
        let mut slots: Vec<Slot> = Vec::new();
        for item in doc.included.into_iter() {
            let Included::Slot { id, attributes } = item else {
                continue;
            };
            let (Some(start_raw), Some(end_raw)) = (attributes.start, attributes.end) else {
                warn!(slot_id = %id, court = %court_name, "Feed entry missing start or end; skipping");
                continue;
            };
            let parsed = chrono::DateTime::parse_from_rfc3339(&start_raw)
                .and_then(|s| chrono::DateTime::parse_from_rfc3339(&end_raw).map(|e| (s, e)));
            let (start_dt, end_dt) = match parsed {
                Ok(pair) => pair,
                Err(e) => {
                    warn!(slot_id = %id, court = %court_name, error = %e, "Unparseable feed timestamp; skipping");
                    continue;
                }
            };
            let start_local = start_dt.with_timezone(&Los_Angeles);
            let end_local = end_dt.with_timezone(&Los_Angeles);
            if start_local >= end_local {
                warn!(slot_id = %id, court = %court_name, "Degenerate interval in feed; skipping");
                continue;
            }
            // A slot is a same-day interval; anything spanning midnight would
            // break the start_time < end_time invariant once flattened.
            if start_local.date_naive() != end_local.date_naive() {
                warn!(slot_id = %id, court = %court_name, "Interval crosses midnight; skipping");
                continue;
            }
            slots.push(Slot {
                court_id: court_name.to_string(),
                date: start_local.date_naive(),
                start_time: start_local.time(),
                end_time: end_local.time(),
                is_available: attributes.available,
            });
        }
        info!(court = %court_name, count = slots.len(), "Parsed slots from feed");
        slots
    }
}

impl SlotSource for RecUs {
    /// One GET per court covering the target date range; any court failing fails
    /// the fetch (no retry). Returned slots are restricted to the target dates.
    fn fetch_slots(&self, dates: &[NaiveDate]) -> Result<Vec<Slot>, FetchError> {
        let wanted: HashSet<NaiveDate> = dates.iter().copied().collect();
        let mut all: Vec<Slot> = Vec::new();
        for court in &self.courts {
            let court_slots = self.fetch_court_slots(court, dates)?;
            all.extend(court_slots.into_iter().filter(|s| wanted.contains(&s.date)));
        }
        Ok(all)
    }
}
