//! Cryptographic operations for Pasteur.
//!
//! All primitives come from well-audited crates:
//! - **AES-256-GCM** (`aes-gcm`): authenticated encryption of paste bodies
//! - **getrandom**: operating system CSPRNG for keys and IVs
//! - **base64**: key and envelope encoding
//!
//! ## Security Model
//!
//! - One fresh 256-bit key per paste, never sent to the server
//! - The key travels in the URL fragment only
//! - Key material zeroized from memory on drop
//!
//! We do NOT defend against:
//! - A server that serves malicious page scripts
//! - Leaked links (the link is the capability)

pub mod envelope;
pub mod key;

pub use envelope::{decrypt, encrypt, encrypt_with_adata, Envelope};
pub use key::{Paranoia, PasteKey, KEY_LENGTH, KEY_WORDS};
