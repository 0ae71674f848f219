use chrono::NaiveDate;
use tracing::{error, info, instrument};

use crate::error::{DeliveryError, FetchError};
use crate::model::slot::Slot;
use crate::schedule;
use crate::slack;

/// Source of raw slot data for a set of target dates. Implemented by the
/// rec.us feed client; test doubles stand in for it without network access.
pub trait SlotSource {
    fn fetch_slots(&self, dates: &[NaiveDate]) -> Result<Vec<Slot>, FetchError>;
}

/// Delivery side of the pipeline. Implemented by the Slack webhook client.
pub trait Notifier {
    fn notify(&self, content: &str) -> Result<(), DeliveryError>;
}

/// Outcome of one fetch-filter-notify cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunResult {
    Notified(usize),
    NoQualifyingSlots,
    FetchFailed(String),
    DeliveryFailed(String),
}

/// Run exactly one check cycle: pick target dates, fetch once, filter, and
/// deliver once. An empty qualifying set skips delivery entirely. `today` is
/// passed in so the cycle is deterministic under test.
#[instrument(level = "info", skip(source, notifier))]
pub fn run_check(source: &dyn SlotSource, notifier: &dyn Notifier, today: NaiveDate) -> RunResult {
    let target_dates = schedule::upcoming_eligible_dates(today, schedule::LOOKAHEAD_DAYS);
    info!(?target_dates, "Checking court availability");

    let slots = match source.fetch_slots(&target_dates) {
        Ok(slots) => slots,
        Err(e) => {
            error!(error = %e, "Fetch failed");
            return RunResult::FetchFailed(e.0);
        }
    };
    info!(count = slots.len(), "Fetched slots");

    let qualifying = schedule::filter_eligible(slots);
    if qualifying.is_empty() {
        info!("No qualifying slots; skipping notification");
        return RunResult::NoQualifyingSlots;
    }

    let message = slack::format_message(&qualifying);
    info!(message = %message, count = qualifying.len(), "Prepared notification");
    match notifier.notify(&message) {
        Ok(()) => RunResult::Notified(qualifying.len()),
        Err(e) => {
            error!(error = %e, "Delivery failed");
            RunResult::DeliveryFailed(e.0)
        }
    }
}
