use serde::Deserialize;

/// Wire format of one FrenchKit schedule entry. Deserializing the whole
/// array validates field presence in a single pass; a missing required key
/// surfaces as one structured serde error instead of a cast failure at some
/// access site.
#[derive(Debug, Clone, Deserialize)]
pub struct FrenchKitSession {
    pub id: String,
    #[serde(rename = "type")]
    pub session_type: String,
    pub title: String,
    pub summary: Option<String>,
    #[serde(rename = "fromTime")]
    pub from_time: String,
    #[serde(rename = "toTime")]
    pub to_time: String,
    pub room: String,
    pub speakers: Vec<FrenchKitSpeakerRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FrenchKitSpeakerRef {
    pub id: String,
}

/// Wire format of one FrenchKit speaker entry. The feed carries no surname,
/// bio or company data.
#[derive(Debug, Clone, Deserialize)]
pub struct FrenchKitSpeaker {
    pub id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_schedule_entry() {
        let json = r#"[{
            "id": "s1",
            "type": "talk",
            "title": "T",
            "fromTime": "2022-10-13 09:00",
            "toTime": "2022-10-13 09:45",
            "room": "",
            "speakers": [{"id": "1"}]
        }]"#;

        let entries: Vec<FrenchKitSession> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "s1");
        assert_eq!(entries[0].session_type, "talk");
        assert_eq!(entries[0].summary, None);
        assert_eq!(entries[0].room, "");
        assert_eq!(entries[0].speakers[0].id, "1");
    }

    #[test]
    fn test_missing_required_key_is_a_decode_error() {
        // No "fromTime"
        let json = r#"[{
            "id": "s1",
            "type": "talk",
            "title": "T",
            "toTime": "2022-10-13 09:45",
            "room": "all",
            "speakers": []
        }]"#;

        let result: Result<Vec<FrenchKitSession>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_speaker_entry() {
        let json = r#"[{"id": "42", "firstName": "Ada", "imageURL": "http://x/ada.png"}]"#;

        let speakers: Vec<FrenchKitSpeaker> = serde_json::from_str(json).unwrap();
        assert_eq!(speakers[0].id, "42");
        assert_eq!(speakers[0].first_name, "Ada");
        assert_eq!(speakers[0].image_url, "http://x/ada.png");
    }
}
