use std::env;

use crate::error::ConfigError;

/// Process-lifetime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the AI-assisted extraction fallback. Validated at startup
    /// even though the structured rec.us fetcher does not consume it.
    pub openai_api_key: String,
    pub slack_webhook_url: String,
    /// Optional channel override for the Slack webhook payload.
    pub slack_channel: Option<String>,
}

impl Config {
    /// Read configuration from process environment variables.
    /// Fails with `ConfigError` before any network activity when a required value
    /// is missing or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary lookup, so parsing can be tested
    /// without mutating process state.
    pub fn from_env_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = require(&lookup, "OPENAI_API_KEY")?;
        let slack_webhook_url = require(&lookup, "SLACK_WEBHOOK_URL")?;
        let slack_channel = lookup("SLACK_CHANNEL").filter(|v| !v.trim().is_empty());

        Ok(Config { openai_api_key, slack_webhook_url, slack_channel })
    }
}

fn require<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError(format!("{} must be set", name)))
}
