use std::sync::Arc;

use tracing::info;

use crate::modules::conference::domain::entities::ConferenceConfig;
use crate::modules::conference::domain::{rooms, ConferenceBatch, ConferenceDescriptor};
use crate::shared::errors::AppResult;

use super::ports::{ConferenceStore, ScheduleSource};

/// Counts of what one import run produced, for operator logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub sessions: usize,
    pub rooms: usize,
    pub speakers: usize,
}

/// Orchestrates one import run: fetch both feeds, derive rooms, sort, and
/// hand the assembled batch to the store in a single write.
///
/// All-or-nothing: any fetch, decode or mapping failure propagates before
/// the store is touched. No retries, no partial results.
pub struct ImportService {
    source: Arc<dyn ScheduleSource>,
    store: Arc<dyn ConferenceStore>,
}

impl ImportService {
    pub fn new(source: Arc<dyn ScheduleSource>, store: Arc<dyn ConferenceStore>) -> Self {
        Self { source, store }
    }

    /// Fetch and assemble the full batch without writing it. This is the
    /// whole mapping pipeline; `run` adds only the store call.
    pub async fn fetch_batch(
        &self,
        descriptor: &ConferenceDescriptor,
    ) -> AppResult<ConferenceBatch> {
        let mut sessions = self.source.fetch_sessions().await?;
        let speakers = self.source.fetch_speakers().await?;

        // Rooms are derived in input order, before the sort
        let rooms = rooms::derive_rooms(&sessions);

        // Stable: sessions with equal start keep their source order
        sessions.sort_by_key(|session| session.start);

        Ok(ConferenceBatch {
            conference_id: descriptor.conference_id.clone(),
            sessions,
            rooms,
            speakers,
            partner_groups: Vec::new(),
            config: ConferenceConfig {
                timezone: descriptor.timezone,
            },
            venues: descriptor.venues.clone(),
        })
    }

    pub async fn run(&self, descriptor: &ConferenceDescriptor) -> AppResult<ImportReport> {
        info!("Importing conference data for {}", descriptor.conference_id);

        let batch = self.fetch_batch(descriptor).await?;
        self.store.write(&batch).await?;

        let report = ImportReport {
            sessions: batch.sessions.len(),
            rooms: batch.rooms.len(),
            speakers: batch.speakers.len(),
        };
        info!(
            "Imported {} sessions, {} rooms, {} speakers for {}",
            report.sessions, report.rooms, report.speakers, descriptor.conference_id
        );
        Ok(report)
    }
}
