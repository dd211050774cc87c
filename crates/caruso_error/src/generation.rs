//! Script-generation error types.

/// Kinds of script-generation errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Failed to create the generation client
    #[display("Failed to create generation client: {}", _0)]
    ClientCreation(String),
    /// API request failed
    #[display("Generation request failed: {}", _0)]
    ApiRequest(String),
    /// The model returned no script text
    #[display("Model returned an empty script")]
    EmptyScript,
}

/// Script-generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use caruso_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::EmptyScript);
/// assert!(format!("{}", err).contains("empty script"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new generation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
