//! Top-level error wrapper types.

use crate::{
    ConfigError, ExtractionError, GenerationError, StorageError, SynthesisError, ValidationError,
};

/// This is the foundation error enum. Each pipeline stage and storage
/// concern contributes one variant.
///
/// # Examples
///
/// ```
/// use caruso_error::{CarusoError, ValidationError};
///
/// let validation_err = ValidationError::new("URL cannot be empty");
/// let err: CarusoError = validation_err.into();
/// assert!(format!("{}", err).contains("Validation Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CarusoErrorKind {
    /// Request validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Content-extraction collaborator error
    #[from(ExtractionError)]
    Extraction(ExtractionError),
    /// Script-generation collaborator error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Speech-synthesis collaborator error
    #[from(SynthesisError)]
    Synthesis(SynthesisError),
    /// Ledger or artifact storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Caruso error with kind discrimination.
///
/// # Examples
///
/// ```
/// use caruso_error::{CarusoResult, ConfigError};
///
/// fn might_fail() -> CarusoResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Caruso Error: {}", _0)]
pub struct CarusoError(Box<CarusoErrorKind>);

impl CarusoError {
    /// Create a new error from a kind.
    pub fn new(kind: CarusoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CarusoErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to CarusoErrorKind
impl<T> From<T> for CarusoError
where
    T: Into<CarusoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Caruso operations.
///
/// # Examples
///
/// ```
/// use caruso_error::{CarusoResult, StorageError, StorageErrorKind};
///
/// fn read_audio() -> CarusoResult<Vec<u8>> {
///     Err(StorageError::new(StorageErrorKind::NotFound("podcast.mp3".into())))?
/// }
/// ```
pub type CarusoResult<T> = std::result::Result<T, CarusoError>;
