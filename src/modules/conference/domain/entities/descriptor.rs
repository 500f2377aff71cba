use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::Venue;

/// Everything that varies between conferences: the source endpoints plus the
/// hand-authored metadata that cannot be derived from them. One importer
/// implementation serves any number of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceDescriptor {
    /// Destination key for the whole batch, e.g. "frenchkit2022".
    pub conference_id: String,
    pub schedule_url: String,
    pub speakers_url: String,
    /// Language tag stamped on every imported session.
    pub session_language: String,
    pub timezone: Tz,
    pub venues: Vec<Venue>,
}
