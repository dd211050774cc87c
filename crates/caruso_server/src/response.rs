//! Response models for the HTTP surface.

use caruso_core::GenerationResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response to a successful generation request.
///
/// The audio itself is served from `audio_url`; this is the canonical
/// response contract (no inline base64 payload).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastResponse {
    /// Relative URL the audio can be fetched from
    pub audio_url: String,
    /// Artifact filename
    pub filename: String,
    /// When the artifact was generated
    pub generated_at: DateTime<Utc>,
}

impl From<&GenerationResult> for PodcastResponse {
    fn from(result: &GenerationResult) -> Self {
        Self {
            audio_url: format!("/audio/{}", result.record.filename),
            filename: result.record.filename.clone(),
            generated_at: result.record.generated_at,
        }
    }
}

/// Response to a health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "unhealthy"
    pub status: String,
    /// Names of required environment variables that are absent
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
}

/// Error body, matching the `detail` shape callers already parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable failure description
    pub detail: String,
}

/// Banner served from the root path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service description
    pub message: String,
    /// Always "healthy" when the process is serving
    pub status: String,
}
