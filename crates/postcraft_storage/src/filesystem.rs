//! Filesystem-based session storage.
//!
//! Each session token maps to one JSON file:
//!
//! ```text
//! ~/.local/share/postcraft/sessions/
//! ├── 3b1f9c...e2.json   (sha256 of token A)
//! └── a07d44...9c.json   (sha256 of token B)
//! ```
//!
//! Tokens are hashed so arbitrary strings never become path components.

use crate::SessionRecord;
use async_trait::async_trait;
use postcraft_error::{JsonError, PostcraftResult, StorageError, StorageErrorKind};
use postcraft_interface::{SessionStore, validate_token};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

/// Session store keeping one JSON record per token under a directory.
///
/// Writes go to a temp file and are renamed into place, so a crash mid-write
/// never leaves a truncated record. Read-modify-write cycles inside one process
/// are serialized by an internal lock.
#[derive(Debug)]
pub struct FileSystemSessionStore {
    base_path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSystemSessionStore {
    /// Create a store rooted at `base_path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageErrorKind::DirectoryCreation` if the directory cannot be created.
    #[instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> PostcraftResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        info!(path = %base_path.display(), "Opened filesystem session store");
        Ok(Self {
            base_path,
            write_lock: Mutex::new(()),
        })
    }

    /// Root directory of the store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of the record file for `token`.
    pub fn record_path(&self, token: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        self.base_path.join(format!("{:x}.json", hasher.finalize()))
    }

    async fn load(&self, path: &Path) -> PostcraftResult<SessionRecord> {
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No session record yet");
                return Ok(SessionRecord::new());
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
                .into());
            }
        };

        serde_json::from_str(&contents).map_err(|e| {
            warn!(path = %path.display(), error = %e, "Session record is corrupt");
            StorageError::new(StorageErrorKind::Corrupt(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()
        })
    }

    async fn save(&self, path: &Path, record: &SessionRecord) -> PostcraftResult<()> {
        if record.is_empty() {
            return match tokio::fs::remove_file(path).await {
                Ok(()) => {
                    debug!(path = %path.display(), "Removed empty session record");
                    Ok(())
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(StorageError::new(StorageErrorKind::FileDelete(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
                .into()),
            };
        }

        let contents = serde_json::to_string_pretty(record)
            .map_err(|e| JsonError::new(format!("Failed to serialize session record: {}", e)))?;

        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, contents).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        debug!(path = %path.display(), keys = record.values().len(), "Saved session record");
        Ok(())
    }
}

#[async_trait]
impl SessionStore for FileSystemSessionStore {
    #[instrument(skip(self, token))]
    async fn get(&self, token: &str, key: &str) -> PostcraftResult<Option<Value>> {
        validate_token(token)?;
        let record = self.load(&self.record_path(token)).await?;
        Ok(record.get(key).cloned())
    }

    #[instrument(skip(self, token, value))]
    async fn set(&self, token: &str, key: &str, value: Value) -> PostcraftResult<()> {
        validate_token(token)?;
        let path = self.record_path(token);
        let _guard = self.write_lock.lock().await;
        let mut record = self.load(&path).await?;
        record.set(key, value);
        self.save(&path, &record).await
    }

    #[instrument(skip(self, token))]
    async fn delete(&self, token: &str, key: &str) -> PostcraftResult<()> {
        validate_token(token)?;
        let path = self.record_path(token);
        let _guard = self.write_lock.lock().await;
        let mut record = self.load(&path).await?;
        if record.remove(key).is_none() {
            return Ok(());
        }
        self.save(&path, &record).await
    }
}
