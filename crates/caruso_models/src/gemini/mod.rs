//! Gemini script-generation client.

mod client;

pub use client::GeminiScriptWriter;
