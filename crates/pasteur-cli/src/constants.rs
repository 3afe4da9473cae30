//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const GENERAL: i32 = 1;

    /// Resource not found (config, page element, input file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input, key or envelope.
    pub const INVALID_INPUT: i32 = 4;

    /// The key does not open the ciphertext.
    pub const DECRYPT_FAILED: i32 = 5;

    /// The server could not be reached or rejected the request.
    pub const TRANSPORT_FAILED: i32 = 6;
}
