use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A conference venue. Hand-authored per conference, never derived from the
/// fetched schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Venue description keyed by language code ("en", "fr", ...).
    pub description: HashMap<String, String>,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: String,
}
