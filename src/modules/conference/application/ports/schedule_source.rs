use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::modules::conference::domain::{Session, Speaker};
use crate::shared::errors::AppResult;

/// Port (interface) for the remote schedule/speaker feed.
/// Infrastructure implements this per source format (FrenchKit, ...), so the
/// importer never talks to a transport directly and tests can substitute a
/// fake.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Fetch and map all sessions from the schedule feed.
    async fn fetch_sessions(&self) -> AppResult<Vec<Session>>;

    /// Fetch and map all speakers from the speaker feed.
    async fn fetch_speakers(&self) -> AppResult<Vec<Speaker>>;
}
