//! Helper functions for the CLI.

mod input;

pub use input::{parse_field, read_ciphertext, read_paste_body};
