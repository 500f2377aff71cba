use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::modules::conference::application::ports::ScheduleSource;
use crate::modules::conference::domain::{ConferenceDescriptor, Session, Speaker};
use crate::shared::errors::{AppError, AppResult};

use super::dto::{FrenchKitSession, FrenchKitSpeaker};
use super::mapper::FrenchKitMapper;

const HTTP_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = "confsync/0.1";

/// FrenchKit feed adapter. Fetches the schedule and speaker documents over
/// HTTP and maps them into domain entities.
pub struct FrenchKitClient {
    client: Client,
    schedule_url: String,
    speakers_url: String,
    language: String,
}

impl FrenchKitClient {
    pub fn new(descriptor: &ConferenceDescriptor) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::with_client(client, descriptor))
    }

    /// Build the adapter around an existing reqwest client.
    pub fn with_client(client: Client, descriptor: &ConferenceDescriptor) -> Self {
        Self {
            client,
            schedule_url: descriptor.schedule_url.clone(),
            speakers_url: descriptor.speakers_url.clone(),
            language: descriptor.session_language.clone(),
        }
    }

    /// GET one document as text. A non-2xx status is fatal and the error
    /// carries the response body for diagnostics.
    async fn get_text(&self, url: &str) -> AppResult<String> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AppError::ApiError(format!(
                "GET {} returned {}: {}",
                url, status, body
            )));
        }
        Ok(body)
    }
}

#[async_trait]
impl ScheduleSource for FrenchKitClient {
    async fn fetch_sessions(&self) -> AppResult<Vec<Session>> {
        let body = self.get_text(&self.schedule_url).await?;
        let entries: Vec<FrenchKitSession> = serde_json::from_str(&body)?;

        entries
            .into_iter()
            .map(|entry| FrenchKitMapper::to_session(entry, &self.language))
            .collect()
    }

    async fn fetch_speakers(&self) -> AppResult<Vec<Speaker>> {
        let body = self.get_text(&self.speakers_url).await?;
        let entries: Vec<FrenchKitSpeaker> = serde_json::from_str(&body)?;

        Ok(entries
            .into_iter()
            .map(FrenchKitMapper::to_speaker)
            .collect())
    }
}
