use super::entities::{Room, Session};

/// Sentinel room for sessions the source leaves unassigned (keynotes, breaks
/// and other whole-venue slots).
pub const ROOM_ALL: &str = "all";

/// Normalize a raw room name from the source: blank or all-whitespace maps
/// to [`ROOM_ALL`], anything else passes through unchanged.
pub fn normalize_room(raw: &str) -> String {
    if raw.trim().is_empty() {
        ROOM_ALL.to_string()
    } else {
        raw.to_string()
    }
}

/// Derive the room entity list from the sessions: one entity per distinct
/// normalized room identifier, in order of first appearance, with the
/// identifier doubling as the display name.
pub fn derive_rooms(sessions: &[Session]) -> Vec<Room> {
    let mut rooms: Vec<Room> = Vec::new();
    for session in sessions {
        for identifier in &session.rooms {
            if !rooms.iter().any(|room| &room.id == identifier) {
                rooms.push(Room::new(identifier.clone()));
            }
        }
    }
    rooms
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn session_in_rooms(id: &str, rooms: &[&str]) -> Session {
        let start = NaiveDate::from_ymd_opt(2022, 10, 13)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Session {
            id: id.to_string(),
            session_type: "talk".to_string(),
            title: "T".to_string(),
            description: None,
            language: "en-US".to_string(),
            start,
            end: start,
            complexity: None,
            feedback_id: None,
            tags: vec![],
            rooms: rooms.iter().map(|r| r.to_string()).collect(),
            speakers: vec![],
        }
    }

    #[test]
    fn test_blank_room_normalizes_to_all() {
        assert_eq!(normalize_room(""), "all");
        assert_eq!(normalize_room("   "), "all");
        assert_eq!(normalize_room("\t\n"), "all");
    }

    #[test]
    fn test_non_blank_room_passes_through_unchanged() {
        assert_eq!(normalize_room("Grand Hall"), "Grand Hall");
        // No trimming on non-blank values, by contract
        assert_eq!(normalize_room(" Stage 2 "), " Stage 2 ");
    }

    #[test]
    fn test_derive_rooms_collapses_duplicates() {
        let sessions = vec![
            session_in_rooms("s1", &["all"]),
            session_in_rooms("s2", &["Grand Hall"]),
            session_in_rooms("s3", &["all"]),
        ];

        let rooms = derive_rooms(&sessions);
        assert_eq!(
            rooms,
            vec![Room::new("all"), Room::new("Grand Hall")]
        );
    }

    #[test]
    fn test_derive_rooms_keeps_first_appearance_order() {
        let sessions = vec![
            session_in_rooms("s1", &["B"]),
            session_in_rooms("s2", &["A", "B"]),
        ];

        let ids: Vec<_> = derive_rooms(&sessions).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["B", "A"]);
    }

    #[test]
    fn test_room_entity_uses_identifier_as_both_id_and_name() {
        let room = Room::new("Grand Hall");
        assert_eq!(room.id, "Grand Hall");
        assert_eq!(room.name, "Grand Hall");
    }
}
