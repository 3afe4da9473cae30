//! # Pasteur Core
//!
//! Core library for Pasteur - a pastebin client that encrypts pastes before
//! they leave the machine and carries the key in the URL fragment.
//!
//! This crate holds the domain logic independent of where it runs; the
//! browser bindings and the CLI both drive it through the [`Page`] trait.
//!
//! ## Architecture
//!
//! - **crypto**: paste keys, paranoia levels, and the sealed envelope
//! - **form**: form fields and the hidden-field submission form
//! - **fragment**: moving keys in and out of URL fragments
//! - **page**: the page abstraction handlers run against
//! - **paste**: the encrypt-on-submit and decrypt-on-load handlers

pub mod crypto;
pub mod error;
pub mod form;
pub mod fragment;
pub mod page;
pub mod paste;

pub use crypto::{Envelope, Paranoia, PasteKey};
pub use error::{PasteurError, Result};
pub use form::{FormFields, FormMethod, HiddenForm};
pub use page::{MemoryPage, Page};
pub use paste::{do_decrypt, do_encrypt, open_paste, post, seal_form, SealedForm};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
