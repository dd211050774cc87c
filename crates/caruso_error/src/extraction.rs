//! Content-extraction error types.

/// Kinds of content-extraction errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ExtractionErrorKind {
    /// API key not found in environment
    #[display("FIRECRAWL_API_KEY environment variable not set")]
    MissingApiKey,
    /// Scrape request failed before a response arrived
    #[display("Scrape request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Failed to deserialize the scrape response
    #[display("Failed to deserialize scrape response: {}", _0)]
    Deserialization(String),
    /// Scrape succeeded but yielded no usable content
    #[display("No extractable content at {}", _0)]
    EmptyContent(String),
}

/// Content-extraction error with source location tracking.
///
/// # Examples
///
/// ```
/// use caruso_error::{ExtractionError, ExtractionErrorKind};
///
/// let err = ExtractionError::new(ExtractionErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("FIRECRAWL_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Extraction Error: {} at line {} in {}", kind, line, file)]
pub struct ExtractionError {
    /// The kind of error that occurred
    pub kind: ExtractionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ExtractionError {
    /// Create a new extraction error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtractionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
