//! Google Gemini script writer.
//!
//! Wraps the `gemini-rust` client behind the `ScriptWriter` trait. The
//! client is constructed per call, so a key added to the environment after
//! startup is picked up without a restart and a missing key surfaces as a
//! per-request error rather than a startup failure.

use async_trait::async_trait;
use caruso_error::{CarusoResult, GenerationError, GenerationErrorKind};
use caruso_interface::ScriptWriter;
use gemini_rust::{client::Model, Gemini};
use std::env;
use tracing::instrument;

const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Fixed instruction set for the script writer.
///
/// The 2000-character cap is advisory to the model; synthesis downstream
/// tolerates scripts that exceed it.
const SCRIPT_INSTRUCTIONS: &str = "\
You create engaging podcast summaries from blog content. Given the blog content:
1. Create a concise, engaging summary that is NO MORE than 2000 characters long.
2. Write in a natural, conversational tone that's perfect for podcast delivery.
3. DO NOT include any podcast-specific elements like 'Host:', 'Intro Music:', or 'Outro Music:'.
4. Focus on the main points and key insights from the blog.
5. Use clear transitions between topics.
6. End with a strong conclusion that summarizes the key takeaways.
7. Ensure the summary is within the 2000 character limit.
8. Format the text with proper punctuation and pauses for natural speech delivery.";

/// Script writer backed by the Google Gemini API.
#[derive(Clone)]
pub struct GeminiScriptWriter {
    api_key: Option<String>,
    model_name: String,
}

impl std::fmt::Debug for GeminiScriptWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiScriptWriter")
            .field("model_name", &self.model_name)
            .field("has_api_key", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}

impl GeminiScriptWriter {
    /// Create a writer, reading the API key from `GEMINI_API_KEY`.
    ///
    /// A missing key is not an error here; script calls fail with
    /// `MissingApiKey` until one is configured.
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("GEMINI_API_KEY").ok(),
            model_name: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create a writer with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            model_name: DEFAULT_MODEL.to_string(),
        }
    }

    /// Override the model used for script generation.
    pub fn with_model(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Known names map to their enum variants; anything else becomes
    /// Model::Custom with the "models/" prefix the API requires.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    fn client(&self) -> Result<Gemini, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::MissingApiKey))?;

        Gemini::with_model(api_key, Self::model_name_to_enum(&self.model_name))
            .map_err(|e| GenerationError::new(GenerationErrorKind::ClientCreation(e.to_string())))
    }
}

impl Default for GeminiScriptWriter {
    fn default() -> Self {
        Self::from_env()
    }
}

#[async_trait]
impl ScriptWriter for GeminiScriptWriter {
    #[instrument(skip(self, content), fields(model = %self.model_name, content_chars = content.len()))]
    async fn write_script(&self, content: &str) -> CarusoResult<String> {
        let client = self.client()?;

        let prompt = format!("Convert this blog content to a podcast script:\n\n{content}");

        let response = client
            .generate_content()
            .with_system_prompt(SCRIPT_INSTRUCTIONS)
            .with_user_message(&prompt)
            .execute()
            .await
            .map_err(|e| GenerationError::new(GenerationErrorKind::ApiRequest(e.to_string())))?;

        let script = response.text();
        if script.trim().is_empty() {
            Err(GenerationError::new(GenerationErrorKind::EmptyScript))?;
        }

        tracing::debug!(script_chars = script.len(), "Generated podcast script");
        Ok(script)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
