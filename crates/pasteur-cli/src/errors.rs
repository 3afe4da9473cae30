//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes so scripts can tell a wrong key
//! from an unreachable server.

use std::fmt;

use pasteur_core::PasteurError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, input file, page element)
    NotFound { message: String, hint: String },

    /// Invalid user input, key or envelope
    InvalidInput {
        message: String,
        hint: Option<String>,
    },

    /// The key does not open the ciphertext
    DecryptFailed { message: String, hint: String },

    /// HTTP transport failure
    Transport(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, .. } => write!(f, "{}", message),
            CliError::InvalidInput { message, .. } => write!(f, "{}", message),
            CliError::DecryptFailed { message, .. } => write!(f, "{}", message),
            CliError::Transport(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create a Transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        CliError::Transport(message.into())
    }

    /// Classify a core error.
    pub fn from_core(err: &PasteurError) -> Self {
        match err {
            PasteurError::MissingKey => CliError::invalid_input_with_hint(
                err.to_string(),
                "Pass the full link including the #key part (quote it in your shell).",
            ),
            PasteurError::InvalidKey(_) => CliError::invalid_input_with_hint(
                err.to_string(),
                "The #key part of the link was truncated or altered.",
            ),
            PasteurError::DecryptionFailed => CliError::DecryptFailed {
                message: err.to_string(),
                hint: "The link's key belongs to a different paste, or the paste was modified."
                    .to_string(),
            },
            PasteurError::ElementNotFound(_) => CliError::not_found(
                err.to_string(),
                "The page does not look like a paste page. Use --raw-file to supply the ciphertext.",
            ),
            PasteurError::Page(message) => CliError::transport(message.clone()),
            PasteurError::InvalidEnvelope(_)
            | PasteurError::MissingField(_)
            | PasteurError::InvalidInput(_)
            | PasteurError::Json { .. }
            | PasteurError::Crypto(_) => CliError::invalid_input(err.to_string()),
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } | CliError::DecryptFailed { hint, .. } => Some(hint),
            CliError::InvalidInput { hint, .. } => hint.as_deref(),
            CliError::Transport(_) => None,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::DecryptFailed { .. } => exit_codes::DECRYPT_FAILED,
            CliError::Transport(_) => exit_codes::TRANSPORT_FAILED,
        }
    }
}

/// Exit code and hint for any error that reached `main`.
pub fn classify(err: &anyhow::Error) -> (i32, Option<String>) {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return (cli_err.exit_code(), cli_err.hint().map(str::to_string));
    }
    if let Some(core_err) = err.downcast_ref::<PasteurError>() {
        let cli_err = CliError::from_core(core_err);
        return (cli_err.exit_code(), cli_err.hint().map(str::to_string));
    }
    (exit_codes::GENERAL, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_exit_codes() {
        let cases = [
            (PasteurError::MissingKey, exit_codes::INVALID_INPUT),
            (
                PasteurError::InvalidKey("short".to_string()),
                exit_codes::INVALID_INPUT,
            ),
            (PasteurError::DecryptionFailed, exit_codes::DECRYPT_FAILED),
            (
                PasteurError::ElementNotFound("raw".to_string()),
                exit_codes::NOT_FOUND,
            ),
            (
                PasteurError::Page("connection refused".to_string()),
                exit_codes::TRANSPORT_FAILED,
            ),
        ];
        for (err, code) in cases {
            assert_eq!(CliError::from_core(&err).exit_code(), code, "{}", err);
        }
    }

    #[test]
    fn test_classify_downcasts() {
        let err = anyhow::Error::new(PasteurError::DecryptionFailed);
        let (code, hint) = classify(&err);
        assert_eq!(code, exit_codes::DECRYPT_FAILED);
        assert!(hint.is_some());

        let err = anyhow::anyhow!("something else");
        assert_eq!(classify(&err), (exit_codes::GENERAL, None));
    }
}
