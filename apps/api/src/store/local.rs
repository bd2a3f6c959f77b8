//! Local backend — one JSON document holding the seven local category keys.
//!
//! The document is re-read on every load so edits made by another process
//! show up on the next preview poll. Writes go through a tempfile in the same
//! directory and an atomic rename, so a crash mid-write leaves the previous
//! document intact. Certifications and languages only exist on the relational
//! backend; here they read as absent and reject writes.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tempfile::NamedTempFile;
use tokio::sync::{watch, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::snapshot::{Category, RawSnapshot};
use crate::store::ResumeStore;

const DOCUMENT_NAME: &str = "resume_data.json";

pub struct LocalStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles. Plain reads go around it.
    write_lock: Mutex<()>,
    revision_tx: watch::Sender<u64>,
}

impl LocalStore {
    /// Opens (or prepares) the store under `data_dir`. The document itself is
    /// created lazily on the first write; a missing file is valid empty data.
    pub fn open(data_dir: &Path) -> Result<LocalStore> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("creating data directory {}", data_dir.display()))?;
        let path = data_dir.join(DOCUMENT_NAME);
        info!("Local store document: {}", path.display());
        let (revision_tx, _) = watch::channel(0);
        Ok(LocalStore {
            path,
            write_lock: Mutex::new(()),
            revision_tx,
        })
    }

    /// Reads the current document. Missing file means empty data; a document
    /// that fails to parse degrades to empty with a warning rather than
    /// blocking every read behind one corrupt byte.
    async fn read_document(&self) -> RawSnapshot {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return RawSnapshot::default(),
            Err(err) => {
                warn!("failed to read {}, treating as empty: {err}", self.path.display());
                return RawSnapshot::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(err) => {
                warn!(
                    "document {} is not valid JSON, treating as empty: {err}",
                    self.path.display()
                );
                RawSnapshot::default()
            }
        }
    }

    async fn write_document(&self, document: &RawSnapshot) -> Result<(), AppError> {
        let payload = serde_json::to_vec_pretty(document)
            .map_err(|err| AppError::Storage(format!("serializing document: {err}")))?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || -> Result<(), AppError> {
            let dir = path
                .parent()
                .ok_or_else(|| AppError::Storage("document path has no parent".to_string()))?;
            let mut file = NamedTempFile::new_in(dir)
                .map_err(|err| AppError::Storage(format!("creating tempfile: {err}")))?;
            file.write_all(&payload)
                .map_err(|err| AppError::Storage(format!("writing tempfile: {err}")))?;
            file.persist(&path)
                .map_err(|err| AppError::Storage(format!("persisting document: {err}")))?;
            Ok(())
        })
        .await
        .map_err(|err| AppError::Storage(format!("write task failed: {err}")))??;
        self.revision_tx.send_modify(|revision| *revision += 1);
        Ok(())
    }

    fn require_local(category: Category) -> Result<(), AppError> {
        if category.is_local() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "category '{}' is only available on the postgres backend",
                category.key()
            )))
        }
    }
}

#[async_trait]
impl ResumeStore for LocalStore {
    fn backend_name(&self) -> &'static str {
        "local"
    }

    fn revision(&self) -> watch::Receiver<u64> {
        self.revision_tx.subscribe()
    }

    fn accepts(&self, category: Category) -> bool {
        category.is_local()
    }

    async fn load_snapshot(&self, _user_id: Uuid) -> RawSnapshot {
        self.read_document().await
    }

    async fn load_category(
        &self,
        _user_id: Uuid,
        category: Category,
    ) -> Result<Option<Value>, AppError> {
        if !category.is_local() {
            return Ok(None);
        }
        Ok(self.read_document().await.get(category).cloned())
    }

    async fn save_category(
        &self,
        _user_id: Uuid,
        category: Category,
        value: Value,
    ) -> Result<(), AppError> {
        Self::require_local(category)?;
        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document().await;
        document.set(category, Some(value));
        self.write_document(&document).await
    }

    async fn delete_category(&self, _user_id: Uuid, category: Category) -> Result<(), AppError> {
        Self::require_local(category)?;
        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document().await;
        document.set(category, None);
        self.write_document(&document).await
    }

    async fn delete_all(&self, _user_id: Uuid) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        self.write_document(&RawSnapshot::default()).await
    }
}
