use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use crate::modules::conference::application::ports::ConferenceStore;
use crate::modules::conference::domain::ConferenceBatch;
use crate::shared::errors::AppResult;

/// File-backed [`ConferenceStore`]: one JSON document per conference id,
/// replaced wholesale on every write. Re-running an import with identical
/// input reproduces an identical file.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the batch document for a conference id.
    pub fn batch_path(&self, conference_id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", conference_id))
    }
}

#[async_trait]
impl ConferenceStore for JsonFileStore {
    async fn write(&self, batch: &ConferenceBatch) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let json = serde_json::to_vec_pretty(batch)?;
        let path = self.batch_path(&batch.conference_id);

        // Write to a sibling temp file and rename so readers never observe
        // a half-written batch.
        let tmp_path = self.dir.join(format!("{}.json.tmp", batch.conference_id));
        tokio::fs::write(&tmp_path, &json).await?;
        tokio::fs::rename(&tmp_path, &path).await?;

        info!(
            "Wrote conference batch for {} to {}",
            batch.conference_id,
            path.display()
        );
        Ok(())
    }
}
