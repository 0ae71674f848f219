use serde::{Deserialize, Serialize};

/// JSON:API-style document returned by the rec.us availability feed:
/// the location under `data`, its bookable slots under `included`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AvailabilityDocument {
    pub data: Location,
    #[serde(default)]
    pub included: Vec<Included>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    #[serde(rename = "type")]
    pub type_field: String,
    pub attributes: LocationAttributes,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LocationAttributes {
    pub name: Option<String>,
    pub timezone: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Included {
    #[serde(rename = "slots")]
    Slot {
        id: String,
        attributes: SlotAttributes,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SlotAttributes {
    /// RFC 3339 timestamps; converted to venue-local time by the fetcher.
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(default)]
    pub available: bool,
}
