//! ElevenLabs text-to-speech client.

use async_trait::async_trait;
use caruso_error::{CarusoResult, SynthesisError, SynthesisErrorKind};
use caruso_interface::SpeechSynthesizer;
use futures_util::StreamExt;
use serde::Serialize;
use std::env;
use tracing::instrument;

const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
const DEFAULT_VOICE_ID: &str = "JBFqnCBsd6RMkjVDRZzb";
const DEFAULT_MODEL_ID: &str = "eleven_multilingual_v2";
const OUTPUT_FORMAT: &str = "mp3_44100_128";

/// Client for the ElevenLabs text-to-speech API.
///
/// The API streams MP3 chunks; this client drains the stream into one
/// in-memory buffer before returning, so callers always receive the complete
/// audio. Memory use is bounded by script length.
#[derive(Clone)]
pub struct ElevenLabsSynthesizer {
    api_key: Option<String>,
    base_url: String,
    voice_id: String,
    model_id: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for ElevenLabsSynthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElevenLabsSynthesizer")
            .field("base_url", &self.base_url)
            .field("voice_id", &self.voice_id)
            .field("model_id", &self.model_id)
            .field("has_api_key", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}

/// Body of a text-to-speech request.
#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

impl ElevenLabsSynthesizer {
    /// Create a synthesizer, reading the API key from `ELEVENLABS_API_KEY`.
    ///
    /// A missing key is not an error here; synthesis calls fail with
    /// `MissingApiKey` until one is configured.
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("ELEVENLABS_API_KEY").ok(),
            base_url: DEFAULT_BASE_URL.to_string(),
            voice_id: DEFAULT_VOICE_ID.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a synthesizer with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            voice_id: DEFAULT_VOICE_ID.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the voice used for synthesis.
    pub fn with_voice(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = voice_id.into();
        self
    }

    fn api_key(&self) -> Result<&str, SynthesisError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| SynthesisError::new(SynthesisErrorKind::MissingApiKey))
    }
}

impl Default for ElevenLabsSynthesizer {
    fn default() -> Self {
        Self::from_env()
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsSynthesizer {
    #[instrument(skip(self, script), fields(voice = %self.voice_id, script_chars = script.len()))]
    async fn synthesize(&self, script: &str) -> CarusoResult<Vec<u8>> {
        let api_key = self.api_key()?;
        let endpoint = format!(
            "{}/v1/text-to-speech/{}?output_format={}",
            self.base_url, self.voice_id, OUTPUT_FORMAT
        );

        let body = SynthesisRequest {
            text: script,
            model_id: &self.model_id,
        };

        tracing::debug!(endpoint = %endpoint, "Synthesizing speech");

        let response = self
            .client
            .post(&endpoint)
            .header("xi-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SynthesisError::new(SynthesisErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SynthesisError::new(SynthesisErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        // Drain the chunked response into one buffer before returning.
        let mut stream = response.bytes_stream();
        let mut audio = Vec::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk
                .map_err(|e| SynthesisError::new(SynthesisErrorKind::Stream(e.to_string())))?;
            audio.extend_from_slice(&chunk);
        }

        if audio.is_empty() {
            Err(SynthesisError::new(SynthesisErrorKind::EmptyAudio))?;
        }

        tracing::debug!(bytes = audio.len(), "Synthesized speech");
        Ok(audio)
    }

    fn provider_name(&self) -> &'static str {
        "elevenlabs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_api_key_fails_at_call_time() {
        let synthesizer = ElevenLabsSynthesizer {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            voice_id: DEFAULT_VOICE_ID.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            client: reqwest::Client::new(),
        };

        let err = synthesizer.synthesize("a short script").await.unwrap_err();
        assert!(format!("{err}").contains("ELEVENLABS_API_KEY"));
    }
}
