//! Error types for the Caruso blog-to-podcast service.
//!
//! This crate provides the foundation error types used throughout the Caruso
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use caruso_error::{CarusoResult, ValidationError};
//!
//! fn check_url(url: &str) -> CarusoResult<()> {
//!     if url.trim().is_empty() {
//!         Err(ValidationError::new("URL cannot be empty"))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_url("").is_err());
//! assert!(check_url("https://example.com/post").is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod extraction;
mod generation;
mod synthesis;
mod storage;
mod validation;
mod error;

pub use config::ConfigError;
pub use extraction::{ExtractionError, ExtractionErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};
pub use synthesis::{SynthesisError, SynthesisErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use validation::ValidationError;
pub use error::{CarusoError, CarusoErrorKind, CarusoResult};
