//! The artifact store: audio directory plus ledger, kept in lockstep.

use crate::{retention, LedgerBackend};
use caruso_core::ArtifactRecord;
use caruso_error::{CarusoResult, ConfigError, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// Owns the artifact directory and the ledger, and keeps them consistent.
///
/// Every mutation runs under one internal lock, so the ledger's contents
/// always match the set of audio files on disk: [`ArtifactStore::commit`]
/// writes the audio, appends the record, and enforces retention as a single
/// critical section. Concurrent pipelines therefore cannot interleave
/// load-mutate-save sequences against each other.
pub struct ArtifactStore {
    ledger: Box<dyn LedgerBackend>,
    audio_dir: PathBuf,
    capacity: usize,
    lock: tokio::sync::Mutex<()>,
}

impl std::fmt::Debug for ArtifactStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactStore")
            .field("audio_dir", &self.audio_dir)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl ArtifactStore {
    /// Create a store over `audio_dir` retaining at most `capacity` artifacts.
    ///
    /// Creates the audio directory if it doesn't exist. A capacity of zero is
    /// rejected: the retention policy is defined for positive capacities only.
    #[tracing::instrument(skip(ledger, audio_dir))]
    pub fn new(
        ledger: Box<dyn LedgerBackend>,
        audio_dir: impl Into<PathBuf>,
        capacity: usize,
    ) -> CarusoResult<Self> {
        if capacity == 0 {
            Err(ConfigError::new("Retention capacity must be greater than zero"))?;
        }

        let audio_dir = audio_dir.into();
        std::fs::create_dir_all(&audio_dir).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                audio_dir.display(),
                e
            )))
        })?;

        tracing::info!(
            path = %audio_dir.display(),
            capacity,
            "Opened artifact store"
        );

        Ok(Self {
            ledger,
            audio_dir,
            capacity,
            lock: tokio::sync::Mutex::new(()),
        })
    }

    /// Maximum number of artifacts retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Directory holding the audio files.
    pub fn audio_dir(&self) -> &Path {
        &self.audio_dir
    }

    /// Resolve `filename` inside the audio directory.
    ///
    /// Only bare filenames are accepted; anything that could climb out of
    /// the directory is rejected.
    fn audio_path(&self, filename: &str) -> CarusoResult<PathBuf> {
        if filename.is_empty()
            || filename.contains('/')
            || filename.contains('\\')
            || filename.contains("..")
        {
            Err(StorageError::new(StorageErrorKind::InvalidFilename(
                filename.to_string(),
            )))?;
        }
        Ok(self.audio_dir.join(filename))
    }

    /// Persist a new artifact: write its audio, append its record to the
    /// ledger, and enforce retention, all under the store lock.
    ///
    /// On failure nothing is appended; an audio file already written for
    /// this record may remain, but its record never enters the ledger.
    #[tracing::instrument(skip(self, record, audio), fields(filename = %record.filename, size = audio.len()))]
    pub async fn commit(&self, record: ArtifactRecord, audio: &[u8]) -> CarusoResult<()> {
        let _guard = self.lock.lock().await;

        let path = self.audio_path(&record.filename)?;

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, audio).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        let mut records = self.ledger.load().await?;
        records.push(record);
        self.enforce_locked(records).await?;

        tracing::info!(path = %path.display(), size = audio.len(), "Stored audio artifact");
        Ok(())
    }

    /// Run a retention pass without adding anything.
    ///
    /// Calling this twice in a row produces the same ledger and file set as
    /// calling it once.
    #[tracing::instrument(skip(self))]
    pub async fn enforce(&self) -> CarusoResult<()> {
        let _guard = self.lock.lock().await;
        let records = self.ledger.load().await?;
        if records.len() <= self.capacity {
            return Ok(());
        }
        self.enforce_locked(records).await
    }

    /// Retention pass over `records`; caller must hold the store lock.
    async fn enforce_locked(&self, records: Vec<ArtifactRecord>) -> CarusoResult<()> {
        let plan = retention::plan(records, self.capacity);

        for evicted in &plan.evict {
            let path = self.audio_path(&evicted.filename)?;
            match tokio::fs::remove_file(&path).await {
                Ok(()) => {
                    tracing::info!(path = %path.display(), "Evicted audio artifact");
                }
                // The file may already be gone from an earlier partial
                // failure; eviction stays idempotent.
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "Evicted artifact already absent");
                }
                Err(e) => {
                    return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                        "delete {}: {}",
                        path.display(),
                        e
                    )))
                    .into());
                }
            }
        }

        self.ledger.save(&plan.keep).await
    }

    /// Current ledger contents.
    pub async fn records(&self) -> CarusoResult<Vec<ArtifactRecord>> {
        let _guard = self.lock.lock().await;
        self.ledger.load().await
    }

    /// Read an artifact's audio bytes.
    ///
    /// Fails with `StorageErrorKind::NotFound` when the file is absent.
    #[tracing::instrument(skip(self))]
    pub async fn read_audio(&self, filename: &str) -> CarusoResult<Vec<u8>> {
        let path = self.audio_path(filename)?;

        let data = tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(filename.to_string()))
            } else {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        })?;

        Ok(data)
    }

    /// Check whether an artifact's audio file exists.
    pub async fn audio_exists(&self, filename: &str) -> CarusoResult<bool> {
        let path = self.audio_path(filename)?;
        Ok(tokio::fs::try_exists(&path).await.unwrap_or(false))
    }
}
