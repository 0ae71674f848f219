use tracing::{error, info};

use crate::error::DeliveryError;
use crate::handler::Notifier;
use crate::model::slot::Slot;

const BOOKING_URL: &str = "https://sfrecpark.org/1591/Reservable-Pickleball-Courts";

/// Simple Slack webhook client encapsulating the hook URL and an optional
/// channel override.
#[derive(Debug, Clone)]
pub struct Slack {
    webhook_url: String,
    channel: Option<String>,
}

impl Slack {
    pub fn new(webhook_url: String, channel: Option<String>) -> Self {
        Self { webhook_url, channel }
    }

    /// Post a plain-text message to the webhook URL. One attempt, no retry.
    pub fn post(&self, content: &str) -> Result<(), DeliveryError> {
        let mut payload = serde_json::json!({ "text": content });
        if let Some(channel) = &self.channel {
            payload["channel"] = serde_json::Value::String(channel.clone());
        }
        match ureq::post(&self.webhook_url).send_json(payload) {
            Ok(resp) => {
                info!(status = resp.status().as_u16(), "Posted message to Slack webhook");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to post to Slack webhook");
                Err(DeliveryError(format!("failed to post to Slack webhook: {}", e)))
            }
        }
    }
}

impl Notifier for Slack {
    fn notify(&self, content: &str) -> Result<(), DeliveryError> {
        self.post(content)
    }
}

/// Render qualifying slots into one deterministic message body.
///
/// Slots are ordered by date, then start time, then court id, one line per slot:
/// `<date> <weekday> <start>-<end> Court <court_id>`, with a blank line between
/// dates, a slot-count summary up top and the booking link at the bottom.
pub fn format_message(slots: &[Slot]) -> String {
    let mut ordered: Vec<&Slot> = slots.iter().collect();
    ordered.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then(a.start_time.cmp(&b.start_time))
            .then(a.court_id.cmp(&b.court_id))
    });

    let plural = if ordered.len() == 1 { "" } else { "s" };
    let mut message = format!(
        ":pickleball: {} open pickleball slot{} this week:\n",
        ordered.len(),
        plural
    );

    let mut last_date = None;
    for slot in ordered {
        if last_date != Some(slot.date) {
            message.push('\n');
            last_date = Some(slot.date);
        }
        message.push_str(&format!(
            "{} {} {}-{} Court {}\n",
            slot.date.format("%Y-%m-%d"),
            slot.date.format("%A"),
            slot.start_time.format("%H:%M"),
            slot.end_time.format("%H:%M"),
            slot.court_id
        ));
    }

    message.push_str(&format!("\nBook at {}", BOOKING_URL));
    message
}
