//! Error types for Pasteur core operations.
//!
//! Errors are descriptive at the core level; the CLI and browser layers map
//! them to exit codes or thrown exceptions.

use thiserror::Error;

/// Result type alias for Pasteur operations.
pub type Result<T> = std::result::Result<T, PasteurError>;

/// Core error type for Pasteur operations.
#[derive(Debug, Error)]
pub enum PasteurError {
    /// The URL carries no fragment to read a key from
    #[error("No key in URL fragment")]
    MissingKey,

    /// The fragment is not a valid base64 encoded key
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Ciphertext does not authenticate under the given key
    #[error("Decryption failed: key does not match ciphertext")]
    DecryptionFailed,

    /// Encryption or random generation error
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Ciphertext is not a well-formed envelope
    #[error("Invalid envelope: {0}")]
    InvalidEnvelope(String),

    /// A required form field is absent
    #[error("Missing form field: {0}")]
    MissingField(String),

    /// A page element looked up by id does not exist
    #[error("Element not found: #{0}")]
    ElementNotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Submission or page access failed outside of the core
    #[error("Page error: {0}")]
    Page(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl From<base64::DecodeError> for PasteurError {
    fn from(err: base64::DecodeError) -> Self {
        PasteurError::InvalidKey(err.to_string())
    }
}
