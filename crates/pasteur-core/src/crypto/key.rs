//! Random paste keys and their base64 transport form.
//!
//! A paste key is 8 words of 32 bits drawn from the operating system CSPRNG.
//! It is never stored; it travels only in the URL fragment as standard
//! base64.

use std::fmt;

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use base64::Engine;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use zeroize::{ZeroizeOnDrop, Zeroizing};

use crate::error::{PasteurError, Result};

/// Number of 32-bit words in a paste key.
pub const KEY_WORDS: usize = 8;

/// Length of a paste key in bytes (32 bytes = 256 bits).
pub const KEY_LENGTH: usize = KEY_WORDS * 4;

/// Minimum entropy, in bits, each paranoia level asks of the random source.
const PARANOIA_ENTROPY_BITS: [u32; 11] = [0, 48, 64, 96, 128, 192, 256, 384, 512, 768, 1024];

/// How much entropy the random source must have collected before a key is
/// drawn.
///
/// Levels run from 0 to 10. The operating system generator is seeded before
/// any process can read from it, so every level is satisfied immediately;
/// the level is validated and carried for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Paranoia(u8);

impl Paranoia {
    /// Highest accepted level.
    pub const MAX: u8 = 10;

    /// Create a paranoia level, rejecting values above [`Paranoia::MAX`].
    pub fn new(level: u8) -> Result<Self> {
        if level > Self::MAX {
            return Err(PasteurError::InvalidInput(format!(
                "Paranoia level must be between 0 and {}, got {}",
                Self::MAX,
                level
            )));
        }
        Ok(Self(level))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Entropy in bits the random source must have gathered at this level.
    pub fn required_entropy_bits(self) -> u32 {
        PARANOIA_ENTROPY_BITS[self.0 as usize]
    }
}

impl TryFrom<u8> for Paranoia {
    type Error = PasteurError;

    fn try_from(level: u8) -> Result<Self> {
        Paranoia::new(level)
    }
}

impl From<Paranoia> for u8 {
    fn from(paranoia: Paranoia) -> Self {
        paranoia.0
    }
}

impl fmt::Display for Paranoia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A symmetric paste key.
///
/// Key material is zeroized from memory when dropped and never printed by
/// `Debug`.
#[derive(Clone, PartialEq, Eq, ZeroizeOnDrop)]
pub struct PasteKey {
    key: [u8; KEY_LENGTH],
}

impl PasteKey {
    /// Generate a fresh random key at the given paranoia level.
    pub fn generate(paranoia: Paranoia) -> Result<Self> {
        let mut bytes = Zeroizing::new([0u8; KEY_LENGTH]);
        getrandom::getrandom(&mut *bytes)
            .map_err(|e| PasteurError::Crypto(format!("Failed to generate key bytes: {}", e)))?;
        tracing::debug!(
            words = KEY_WORDS,
            paranoia = paranoia.level(),
            entropy_bits = paranoia.required_entropy_bits(),
            "generated paste key"
        );
        Ok(Self::from_bytes(*bytes))
    }

    /// Wrap existing key bytes.
    pub fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Decode a key from its base64 form.
    ///
    /// Padding is optional and a single leading `#` is ignored, so the raw
    /// value of `location.hash` can be passed directly.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let trimmed = encoded.trim();
        let trimmed = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if trimmed.is_empty() {
            return Err(PasteurError::MissingKey);
        }

        let decoded = Zeroizing::new(
            STANDARD
                .decode(trimmed)
                .or_else(|_| STANDARD_NO_PAD.decode(trimmed))?,
        );
        let bytes: [u8; KEY_LENGTH] = decoded.as_slice().try_into().map_err(|_| {
            PasteurError::InvalidKey(format!(
                "expected {} bytes, got {}",
                KEY_LENGTH,
                decoded.len()
            ))
        })?;
        Ok(Self::from_bytes(bytes))
    }

    /// Encode the key as padded standard base64.
    pub fn to_base64(&self) -> SecretString {
        SecretString::from(STANDARD.encode(self.key))
    }

    /// Raw key bytes. Use only for immediate cipher operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl fmt::Debug for PasteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasteKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}
