use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single talk, workshop or service slot in the conference programme.
///
/// Timestamps are local to the conference; the timezone lives in
/// [`super::config::ConferenceConfig`], not on the session itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    #[serde(rename = "type")]
    pub session_type: String,
    pub title: String,
    pub description: Option<String>,
    /// BCP 47 language tag, e.g. "en-US".
    pub language: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub complexity: Option<String>,
    pub feedback_id: Option<String>,
    pub tags: Vec<String>,
    /// Normalized room identifiers; always at least one entry.
    pub rooms: Vec<String>,
    /// Speaker ids. Not checked against the speaker list.
    pub speakers: Vec<String>,
}
