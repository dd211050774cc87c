//! Persisted artifact metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for one generated audio artifact.
///
/// Records are created by the pipeline after a successful synthesis, stored
/// in the ledger, and destroyed only when the retention policy evicts them.
/// A record is uniquely identified by its `filename`.
///
/// The serialized form uses the key `url` for the source URL, matching the
/// ledger layout consumed by `GET /recent-podcasts`.
///
/// # Examples
///
/// ```
/// use caruso_core::ArtifactRecord;
/// use chrono::Utc;
///
/// let record = ArtifactRecord::new(
///     "podcast_20260807_120000_a1b2c3d4.mp3",
///     Utc::now(),
///     "https://example.com/post",
/// );
/// assert!(record.filename.ends_with(".mp3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    /// Name of the audio file in the artifact directory
    pub filename: String,
    /// When the artifact was generated
    pub generated_at: DateTime<Utc>,
    /// The blog URL the artifact was generated from
    #[serde(rename = "url")]
    pub source_url: String,
}

impl ArtifactRecord {
    /// Create a new record.
    pub fn new(
        filename: impl Into<String>,
        generated_at: DateTime<Utc>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            generated_at,
            source_url: source_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_source_url_as_url() {
        let record = ArtifactRecord::new(
            "podcast_20260807_120000_a1b2c3d4.mp3",
            Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap(),
            "https://example.com/post",
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["url"], "https://example.com/post");
        assert!(json.get("source_url").is_none());

        let parsed: ArtifactRecord = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, record);
    }
}
