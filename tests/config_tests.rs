use std::collections::HashMap;

use pickleball_checker::config::Config;

fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn loads_full_config() {
    let vars = env_of(&[
        ("OPENAI_API_KEY", "sk-test"),
        ("SLACK_WEBHOOK_URL", "https://hooks.slack.com/services/T/B/x"),
        ("SLACK_CHANNEL", "#pickleball"),
    ]);
    let cfg = Config::from_env_with(|k| vars.get(k).cloned()).expect("config should load");
    assert_eq!(cfg.openai_api_key, "sk-test");
    assert_eq!(cfg.slack_webhook_url, "https://hooks.slack.com/services/T/B/x");
    assert_eq!(cfg.slack_channel.as_deref(), Some("#pickleball"));
}

#[test]
fn channel_is_optional() {
    let vars = env_of(&[
        ("OPENAI_API_KEY", "sk-test"),
        ("SLACK_WEBHOOK_URL", "https://hooks.slack.com/services/T/B/x"),
    ]);
    let cfg = Config::from_env_with(|k| vars.get(k).cloned()).expect("config should load");
    assert!(cfg.slack_channel.is_none());
}

#[test]
fn missing_webhook_fails() {
    let vars = env_of(&[("OPENAI_API_KEY", "sk-test")]);
    let err = Config::from_env_with(|k| vars.get(k).cloned()).unwrap_err();
    assert!(err.0.contains("SLACK_WEBHOOK_URL"), "error was: {}", err);
}

#[test]
fn empty_api_key_fails() {
    let vars = env_of(&[
        ("OPENAI_API_KEY", "  "),
        ("SLACK_WEBHOOK_URL", "https://hooks.slack.com/services/T/B/x"),
    ]);
    let err = Config::from_env_with(|k| vars.get(k).cloned()).unwrap_err();
    assert!(err.0.contains("OPENAI_API_KEY"), "error was: {}", err);
}
