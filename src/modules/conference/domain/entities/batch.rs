use serde::{Deserialize, Serialize};

use super::{ConferenceConfig, PartnerGroup, Room, Session, Speaker, Venue};

/// Everything written for one conference identifier in a single call.
///
/// The batch is assembled wholesale on each import run and handed to the
/// store as one unit; a re-run with identical input reproduces an identical
/// destination state (overwrite, not append).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceBatch {
    pub conference_id: String,
    pub sessions: Vec<Session>,
    pub rooms: Vec<Room>,
    pub speakers: Vec<Speaker>,
    pub partner_groups: Vec<PartnerGroup>,
    pub config: ConferenceConfig,
    pub venues: Vec<Venue>,
}
