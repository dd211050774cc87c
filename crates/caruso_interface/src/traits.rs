//! Trait definitions for the three pipeline collaborators.

use async_trait::async_trait;
use caruso_error::CarusoResult;

/// Extracts the main content of a web page.
#[async_trait]
pub trait ContentExtractor: Send + Sync {
    /// Fetch the page at `url` and return its main content as text.
    ///
    /// Fails if the URL is unreachable, blocked, or yields no extractable
    /// content. The collaborator's own message is preserved in the error.
    async fn extract(&self, url: &str) -> CarusoResult<String>;

    /// Provider name (e.g., "firecrawl").
    fn provider_name(&self) -> &'static str;
}

/// Turns blog content into a short spoken-style script.
#[async_trait]
pub trait ScriptWriter: Send + Sync {
    /// Produce a conversational script for the given blog content.
    ///
    /// The length cap communicated to the model is advisory; callers must
    /// tolerate scripts that exceed it. Fails on collaborator failure or
    /// empty output.
    async fn write_script(&self, content: &str) -> CarusoResult<String>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}

/// Synthesizes speech from a script.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize the script and return the audio as one in-memory buffer.
    ///
    /// Implementations drain any streamed response fully before returning,
    /// so memory use is bounded by script length.
    async fn synthesize(&self, script: &str) -> CarusoResult<Vec<u8>>;

    /// Provider name (e.g., "elevenlabs").
    fn provider_name(&self) -> &'static str;
}
