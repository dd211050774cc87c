//! Ledger, retention policy, and artifact storage for Caruso.
//!
//! Generated audio lives in a flat artifact directory; its metadata lives in
//! a single ledger file. This crate keeps the two in lockstep:
//!
//! - [`LedgerBackend`] — pluggable persistence for the record list
//!   ([`JsonLedger`] for production, [`MemoryLedger`] for tests)
//! - [`retention`] — the pure keep/evict split at a fixed capacity
//! - [`ArtifactStore`] — the facade that owns the artifact directory and
//!   serializes every ledger mutation behind one lock, exposing an atomic
//!   append-and-enforce-retention [`ArtifactStore::commit`]
//!
//! # Example
//!
//! ```no_run
//! use caruso_core::ArtifactRecord;
//! use caruso_storage::{ArtifactStore, JsonLedger};
//! use chrono::Utc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ledger = JsonLedger::new("audio_metadata.json");
//! let store = ArtifactStore::new(Box::new(ledger), "audio_generations", 5)?;
//!
//! let record = ArtifactRecord::new("podcast.mp3", Utc::now(), "https://example.com/post");
//! store.commit(record, b"mp3 bytes").await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ledger;
pub mod retention;
mod store;

pub use caruso_error::{StorageError, StorageErrorKind};
pub use ledger::{JsonLedger, LedgerBackend, MemoryLedger};
pub use store::ArtifactStore;
