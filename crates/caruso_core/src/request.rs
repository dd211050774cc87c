//! Request and result types for podcast generation.

use crate::ArtifactRecord;
use caruso_error::{CarusoResult, ValidationError};
use serde::{Deserialize, Serialize};

/// An incoming request to turn a blog article into a podcast.
///
/// # Examples
///
/// ```
/// use caruso_core::PodcastRequest;
///
/// let request = PodcastRequest::new("https://example.com/post");
/// assert!(request.validate().is_ok());
///
/// let blank = PodcastRequest::new("   ");
/// assert!(blank.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastRequest {
    /// The blog URL to convert
    pub url: String,
}

impl PodcastRequest {
    /// Create a new request.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Reject empty or whitespace-only URLs before any collaborator call.
    pub fn validate(&self) -> CarusoResult<()> {
        if self.url.trim().is_empty() {
            Err(ValidationError::new("URL cannot be empty"))?;
        }
        Ok(())
    }
}

/// Everything a successful pipeline run produces.
///
/// The record has already been appended to the ledger by the time a
/// `GenerationResult` is returned; the script and audio bytes are ephemeral.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    /// The ledger record for the new artifact
    pub record: ArtifactRecord,
    /// The generated spoken-style script
    pub script_text: String,
    /// The synthesized audio, fully buffered
    pub audio_bytes: Vec<u8>,
}
