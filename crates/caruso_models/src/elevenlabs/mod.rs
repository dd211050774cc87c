//! ElevenLabs speech-synthesis client.

mod client;

pub use client::ElevenLabsSynthesizer;
