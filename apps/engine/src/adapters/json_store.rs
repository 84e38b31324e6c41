//! File-backed snapshot store: one pretty-printed JSON document per table.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::debug;

use crate::domain::state::Session;
use crate::error::AppError;
use crate::services::SnapshotStore;

/// On-disk document: the full session aggregate plus a save stamp.
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    #[serde(with = "time::serde::rfc3339")]
    saved_at: OffsetDateTime,
    session: Session,
}

pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotStore for JsonSnapshotStore {
    async fn load(&self) -> Result<Option<Session>, AppError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(AppError::io(format!(
                    "read {}: {err}",
                    self.path.display()
                )))
            }
        };
        let file: SnapshotFile = serde_json::from_slice(&bytes).map_err(|err| {
            AppError::io(format!("corrupt snapshot {}: {err}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), saved_at = %file.saved_at, "snapshot loaded");
        Ok(Some(file.session))
    }

    async fn save(&self, session: &Session) -> Result<(), AppError> {
        let file = SnapshotFile {
            saved_at: OffsetDateTime::now_utc(),
            session: session.clone(),
        };
        let bytes = serde_json::to_vec_pretty(&file)
            .map_err(|err| AppError::io(format!("encode snapshot: {err}")))?;

        // Write to a sibling temp file and rename so a crash mid-write never
        // leaves a truncated snapshot behind.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|err| AppError::io(format!("write {}: {err}", tmp.display())))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|err| AppError::io(format!("rename into {}: {err}", self.path.display())))?;
        Ok(())
    }
}
