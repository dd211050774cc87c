//! Pluggable ledger persistence backends.

use caruso_core::ArtifactRecord;
use caruso_error::{CarusoResult, StorageError, StorageErrorKind};
use std::path::PathBuf;
use std::sync::Mutex;

/// Trait for pluggable ledger persistence.
///
/// The ledger is small and read/written wholesale; backends only need to
/// round-trip the full record list. Callers are expected to serialize their
/// own load-mutate-save sequences (see `ArtifactStore`).
#[async_trait::async_trait]
pub trait LedgerBackend: Send + Sync {
    /// Load all records.
    ///
    /// A missing backing file is a first run, not an error, and yields an
    /// empty list. A backing file that exists but does not parse fails with
    /// `StorageErrorKind::CorruptLedger`.
    async fn load(&self) -> CarusoResult<Vec<ArtifactRecord>>;

    /// Overwrite the ledger with `records`.
    ///
    /// Implementations must never leave a partially-written ledger visible
    /// to readers. Fails with `StorageErrorKind::Persistence` on I/O error;
    /// the caller decides whether to retry.
    async fn save(&self, records: &[ArtifactRecord]) -> CarusoResult<()>;
}

/// File-backed ledger storing records as a JSON array.
///
/// Writes go to a sibling temporary path followed by a rename, so a reader
/// never observes a half-written file.
#[derive(Debug, Clone)]
pub struct JsonLedger {
    path: PathBuf,
}

impl JsonLedger {
    /// Create a ledger backed by the file at `path`.
    ///
    /// The file is not created until the first `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl LedgerBackend for JsonLedger {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> CarusoResult<Vec<ArtifactRecord>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No ledger file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
                .into());
            }
        };

        let records = serde_json::from_slice(&bytes).map_err(|e| {
            StorageError::new(StorageErrorKind::CorruptLedger(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        Ok(records)
    }

    #[tracing::instrument(skip(self, records), fields(path = %self.path.display(), count = records.len()))]
    async fn save(&self, records: &[ArtifactRecord]) -> CarusoResult<()> {
        let bytes = serde_json::to_vec(records).map_err(|e| {
            StorageError::new(StorageErrorKind::Persistence(format!(
                "serialize ledger: {}",
                e
            )))
        })?;

        // Write to temp file first, then rename for atomicity
        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, &bytes).await.map_err(|e| {
            StorageError::new(StorageErrorKind::Persistence(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::Persistence(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;

        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "Saved ledger"
        );

        Ok(())
    }
}

/// In-memory ledger for tests and ephemeral deployments.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    records: Mutex<Vec<ArtifactRecord>>,
}

impl MemoryLedger {
    /// Create an empty in-memory ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger pre-populated with `records`.
    pub fn with_records(records: Vec<ArtifactRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

#[async_trait::async_trait]
impl LedgerBackend for MemoryLedger {
    async fn load(&self) -> CarusoResult<Vec<ArtifactRecord>> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn save(&self, records: &[ArtifactRecord]) -> CarusoResult<()> {
        *self.records.lock().unwrap() = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caruso_error::CarusoErrorKind;
    use chrono::{TimeZone, Utc};

    fn record(filename: &str) -> ArtifactRecord {
        ArtifactRecord::new(
            filename,
            Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap(),
            "https://example.com/post",
        )
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = JsonLedger::new(dir.path().join("audio_metadata.json"));

        let records = ledger.load().await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn save_load_round_trip_is_fixed_point() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audio_metadata.json");
        let ledger = JsonLedger::new(&path);

        let records = vec![record("a.mp3"), record("b.mp3")];
        ledger.save(&records).await.unwrap();
        let first_bytes = std::fs::read(&path).unwrap();

        let loaded = ledger.load().await.unwrap();
        assert_eq!(loaded, records);

        // Saving what was just loaded changes nothing on disk.
        ledger.save(&loaded).await.unwrap();
        let second_bytes = std::fs::read(&path).unwrap();
        assert_eq!(first_bytes, second_bytes);
    }

    #[tokio::test]
    async fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audio_metadata.json");
        std::fs::write(&path, b"not json at all").unwrap();

        let err = JsonLedger::new(&path).load().await.unwrap_err();
        match err.kind() {
            CarusoErrorKind::Storage(e) => {
                assert!(matches!(e.kind, StorageErrorKind::CorruptLedger(_)))
            }
            other => panic!("Expected storage error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audio_metadata.json");
        let ledger = JsonLedger::new(&path);

        ledger.save(&[record("a.mp3")]).await.unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[tokio::test]
    async fn memory_ledger_round_trips() {
        let ledger = MemoryLedger::new();
        assert!(ledger.load().await.unwrap().is_empty());

        let records = vec![record("a.mp3")];
        ledger.save(&records).await.unwrap();
        assert_eq!(ledger.load().await.unwrap(), records);
    }
}
