//! Collaborator trait definitions for the Caruso blog-to-podcast service.
//!
//! The pipeline delegates all of its heavy lifting to three external
//! services. Each is modeled as a narrow trait with a single operation so the
//! pipeline can be exercised with fakes in tests and so concrete clients stay
//! swappable:
//!
//! - [`ContentExtractor`] — URL → main-content text
//! - [`ScriptWriter`] — blog content → short spoken-style script
//! - [`SpeechSynthesizer`] — script → fully buffered audio bytes
//!
//! None of the traits carries retry or circuit-breaking semantics; a failed
//! call surfaces directly to the caller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ContentExtractor, ScriptWriter, SpeechSynthesizer};
