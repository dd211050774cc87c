//! Collaborator clients for the Caruso blog-to-podcast service.
//!
//! One module per external provider, each implementing the matching
//! `caruso_interface` trait:
//!
//! - [`FirecrawlClient`] — content extraction (`ContentExtractor`)
//! - [`GeminiScriptWriter`] — script generation (`ScriptWriter`)
//! - [`ElevenLabsSynthesizer`] — speech synthesis (`SpeechSynthesizer`)
//!
//! Clients read their API keys from the environment when constructed with
//! `from_env`. A missing key does not fail construction — the service must
//! keep serving `/health` without credentials — it surfaces as the stage's
//! `MissingApiKey` error when the collaborator is actually called.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod elevenlabs;
mod firecrawl;
mod gemini;

pub use elevenlabs::ElevenLabsSynthesizer;
pub use firecrawl::FirecrawlClient;
pub use gemini::GeminiScriptWriter;
