//! Speech-synthesis error types.

/// Kinds of speech-synthesis errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SynthesisErrorKind {
    /// API key not found in environment
    #[display("ELEVENLABS_API_KEY environment variable not set")]
    MissingApiKey,
    /// Synthesis request failed before a response arrived
    #[display("Synthesis request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The audio stream was interrupted mid-transfer
    #[display("Audio stream interrupted: {}", _0)]
    Stream(String),
    /// Synthesis succeeded but produced no audio bytes
    #[display("Synthesis produced no audio")]
    EmptyAudio,
}

/// Speech-synthesis error with source location tracking.
///
/// # Examples
///
/// ```
/// use caruso_error::{SynthesisError, SynthesisErrorKind};
///
/// let err = SynthesisError::new(SynthesisErrorKind::HttpError {
///     status_code: 401,
///     message: "invalid api key".to_string(),
/// });
/// assert!(format!("{}", err).contains("401"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Synthesis Error: {} at line {} in {}", kind, line, file)]
pub struct SynthesisError {
    /// The kind of error that occurred
    pub kind: SynthesisErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SynthesisError {
    /// Create a new synthesis error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SynthesisErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
