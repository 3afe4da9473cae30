//! Command handlers.

pub mod decrypt;
pub mod encrypt;
pub mod init;
pub mod inspect;
pub mod keygen;
pub mod misc;
