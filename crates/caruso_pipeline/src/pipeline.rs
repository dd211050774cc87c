//! Pipeline orchestration logic.

use caruso_core::{ArtifactRecord, GenerationResult, PodcastRequest};
use caruso_error::CarusoResult;
use caruso_interface::{ContentExtractor, ScriptWriter, SpeechSynthesizer};
use caruso_storage::ArtifactStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Runs blog URLs through extraction, script generation, and speech
/// synthesis, then persists the result.
///
/// The pipeline holds no mutable state of its own; concurrent requests each
/// run their own chain of collaborator calls, and the artifact store
/// serializes the shared ledger/directory mutation at the end.
pub struct PodcastPipeline {
    extractor: Arc<dyn ContentExtractor>,
    writer: Arc<dyn ScriptWriter>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    store: Arc<ArtifactStore>,
}

impl std::fmt::Debug for PodcastPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PodcastPipeline")
            .field("extractor", &self.extractor.provider_name())
            .field("writer", &self.writer.provider_name())
            .field("synthesizer", &self.synthesizer.provider_name())
            .finish_non_exhaustive()
    }
}

impl PodcastPipeline {
    /// Create a pipeline over the given collaborators and store.
    pub fn new(
        extractor: Arc<dyn ContentExtractor>,
        writer: Arc<dyn ScriptWriter>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        store: Arc<ArtifactStore>,
    ) -> Self {
        Self {
            extractor,
            writer,
            synthesizer,
            store,
        }
    }

    /// The artifact store backing this pipeline.
    pub fn store(&self) -> &Arc<ArtifactStore> {
        &self.store
    }

    /// Generate a podcast from a blog URL.
    ///
    /// Stages run strictly in sequence; the first failure aborts the request
    /// and no ledger entry is written for it. On success the new record has
    /// already been committed — and retention enforced — before this returns.
    #[tracing::instrument(skip(self, request), fields(url = %request.url))]
    pub async fn generate(&self, request: &PodcastRequest) -> CarusoResult<GenerationResult> {
        request.validate()?;

        tracing::info!(url = %request.url, "Generating podcast");

        let content = self.extractor.extract(&request.url).await?;
        tracing::debug!(
            provider = self.extractor.provider_name(),
            chars = content.len(),
            "Extracted blog content"
        );

        let script_text = self.writer.write_script(&content).await?;
        tracing::debug!(
            provider = self.writer.provider_name(),
            chars = script_text.len(),
            "Wrote podcast script"
        );

        let audio_bytes = self.synthesizer.synthesize(&script_text).await?;
        tracing::debug!(
            provider = self.synthesizer.provider_name(),
            bytes = audio_bytes.len(),
            "Synthesized audio"
        );

        let generated_at = Utc::now();
        let record = ArtifactRecord::new(
            audio_filename(generated_at),
            generated_at,
            request.url.clone(),
        );
        self.store.commit(record.clone(), &audio_bytes).await?;

        tracing::info!(
            url = %request.url,
            filename = %record.filename,
            bytes = audio_bytes.len(),
            "Generated podcast"
        );

        Ok(GenerationResult {
            record,
            script_text,
            audio_bytes,
        })
    }
}

/// Build a unique artifact filename.
///
/// The timestamp prefix keeps files recognizable and roughly sortable; the
/// UUID fragment keeps concurrent generations within the same second from
/// colliding.
fn audio_filename(generated_at: DateTime<Utc>) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!(
        "podcast_{}_{}.mp3",
        generated_at.format("%Y%m%d_%H%M%S"),
        &suffix[..8]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn filenames_carry_timestamp_and_are_unique() {
        let at = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap();

        let first = audio_filename(at);
        let second = audio_filename(at);

        assert!(first.starts_with("podcast_20260807_120000_"));
        assert!(first.ends_with(".mp3"));
        assert_ne!(first, second);
    }
}
