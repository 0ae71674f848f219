use std::process::ExitCode;

use chrono_tz::America::Los_Angeles;
use tracing::{error, info};

use pickleball_checker::config::Config;
use pickleball_checker::handler::{self, RunResult};
use pickleball_checker::model::court;
use pickleball_checker::recus::RecUs;
use pickleball_checker::slack::Slack;

fn main() -> ExitCode {
    // Initialize structured logging with tracing
    let _ = tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::INFO)
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false)
        .try_init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::from(2);
        }
    };

    let source = RecUs::new(court::all_courts());
    let slack = Slack::new(config.slack_webhook_url, config.slack_channel);
    let today = chrono::Utc::now().with_timezone(&Los_Angeles).date_naive();

    match handler::run_check(&source, &slack, today) {
        RunResult::Notified(count) => {
            info!(count, "Notification sent");
            ExitCode::SUCCESS
        }
        RunResult::NoQualifyingSlots => {
            info!("No qualifying slots this week");
            ExitCode::SUCCESS
        }
        RunResult::FetchFailed(reason) => {
            error!(reason = %reason, "Availability check failed");
            ExitCode::FAILURE
        }
        RunResult::DeliveryFailed(reason) => {
            error!(reason = %reason, "Notification delivery failed");
            ExitCode::FAILURE
        }
    }
}
