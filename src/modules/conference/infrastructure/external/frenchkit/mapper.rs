use chrono::NaiveDateTime;

use crate::modules::conference::domain::rooms::normalize_room;
use crate::modules::conference::domain::{Session, Speaker};
use crate::shared::errors::{AppError, AppResult};

use super::dto::{FrenchKitSession, FrenchKitSpeaker};

/// Converts FrenchKit wire records into normalized domain entities.
pub struct FrenchKitMapper;

impl FrenchKitMapper {
    pub fn to_session(dto: FrenchKitSession, language: &str) -> AppResult<Session> {
        let speakers = dto.speakers.into_iter().map(|s| s.id).collect();

        Ok(Session {
            id: dto.id,
            session_type: dto.session_type,
            title: dto.title,
            description: dto.summary,
            language: language.to_string(),
            start: Self::parse_local_time(&dto.from_time)?,
            end: Self::parse_local_time(&dto.to_time)?,
            complexity: None,
            feedback_id: None,
            tags: Vec::new(),
            rooms: vec![normalize_room(&dto.room)],
            speakers,
        })
    }

    pub fn to_speaker(dto: FrenchKitSpeaker) -> Speaker {
        Speaker {
            id: dto.id,
            name: dto.first_name,
            photo_url: dto.image_url,
            bio: None,
            city: None,
            company: None,
            company_logo_url: None,
            links: Vec::new(),
        }
    }

    /// FrenchKit writes `"YYYY-MM-DD HH:MM"`. Replacing the space with `T`
    /// yields a local-datetime literal; no offset or zone is attached.
    fn parse_local_time(raw: &str) -> AppResult<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&raw.replace(' ', "T"), "%Y-%m-%dT%H:%M")
            .map_err(|e| AppError::InvalidInput(format!("invalid session time '{}': {}", raw, e)))
    }
}
