use std::fmt;

/// Missing or invalid configuration. Fatal; raised before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(pub String);

/// The availability source was unreachable or returned unparseable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError(pub String);

/// The message channel rejected the notification or was unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}", self.0)
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fetch error: {}", self.0)
    }
}

impl fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "delivery error: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}
impl std::error::Error for FetchError {}
impl std::error::Error for DeliveryError {}
