//! File-backed store holding reservations as a single JSON array.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::Reservation;
use crate::error::RsvpError;

/// Durable list of [`Reservation`] records backed by one JSON-array file.
///
/// Every operation is a full read or a full read-modify-write of the
/// backing file; there is no in-memory cache, so the file is the single
/// source of truth. Mutations are serialized behind an in-process mutex,
/// which rules out lost updates between overlapping writers in the same
/// process. No cross-process locking and no atomic-rename durability.
#[derive(Debug)]
pub struct ReservationStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ReservationStore {
    /// Creates a store over the given file path. No I/O happens here;
    /// call [`ReservationStore::ensure_initialized`] before serving.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Guarantees the backing directory and file exist, creating the
    /// file with an empty array when absent. Idempotent; existing
    /// content is never touched.
    ///
    /// # Errors
    ///
    /// Returns [`RsvpError::StoreWrite`] if the directory or file cannot
    /// be created. Callers treat this as non-fatal: subsequent requests
    /// fail individually with store errors.
    pub async fn ensure_initialized(&self) -> Result<(), RsvpError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| RsvpError::StoreWrite(e.to_string()))?;
        }

        match fs::try_exists(&self.path).await {
            Ok(true) => Ok(()),
            _ => fs::write(&self.path, b"[]")
                .await
                .map_err(|e| RsvpError::StoreWrite(e.to_string())),
        }
    }

    /// Reads and parses the full reservation array.
    ///
    /// # Errors
    ///
    /// Returns [`RsvpError::StoreRead`] if the file is unreadable or does
    /// not contain valid JSON. No automatic repair is attempted.
    pub async fn load_all(&self) -> Result<Vec<Reservation>, RsvpError> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|e| RsvpError::StoreRead(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| RsvpError::StoreRead(e.to_string()))
    }

    /// Appends one record: loads the current array, pushes the record,
    /// writes the whole array back.
    ///
    /// # Errors
    ///
    /// Returns [`RsvpError::StoreWrite`] on any I/O or serialization
    /// failure, including failure to read the prior state.
    pub async fn append(&self, record: Reservation) -> Result<(), RsvpError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self
            .load_all()
            .await
            .map_err(|e| RsvpError::StoreWrite(e.detail().to_string()))?;
        records.push(record);
        self.write_all(&records).await
    }

    /// Removes every record whose timestamp equals `ts` (the timestamp
    /// is not enforced unique) and returns how many were removed.
    /// Matching nothing is success, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`RsvpError::StoreWrite`] on any I/O or serialization
    /// failure.
    pub async fn remove_by_timestamp(&self, ts: &str) -> Result<usize, RsvpError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self
            .load_all()
            .await
            .map_err(|e| RsvpError::StoreWrite(e.detail().to_string()))?;
        let before = records.len();
        records.retain(|r| r.timestamp != ts);
        let removed = before - records.len();
        self.write_all(&records).await?;
        Ok(removed)
    }

    /// Serializes the array pretty-printed and rewrites the file.
    async fn write_all(&self, records: &[Reservation]) -> Result<(), RsvpError> {
        let data = serde_json::to_vec_pretty(records)
            .map_err(|e| RsvpError::StoreWrite(e.to_string()))?;
        fs::write(&self.path, data)
            .await
            .map_err(|e| RsvpError::StoreWrite(e.to_string()))
    }
}
