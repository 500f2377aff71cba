use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::modules::conference::domain::ConferenceBatch;
use crate::shared::errors::AppResult;

/// Port (interface) for the destination datastore.
///
/// One call persists the whole batch under its conference identifier with
/// overwrite semantics. The importer never writes partial results: on any
/// upstream failure this port sees zero calls.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ConferenceStore: Send + Sync {
    async fn write(&self, batch: &ConferenceBatch) -> AppResult<()>;
}
