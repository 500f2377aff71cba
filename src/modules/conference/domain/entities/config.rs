use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Per-conference configuration attached to the whole batch. Session
/// timestamps are local; this is where their timezone is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceConfig {
    pub timezone: Tz,
}
