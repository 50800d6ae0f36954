//! Authentication primitives.
//!
//! - [`password`] -- legacy unsalted SHA-256 credential digests.
//! - [`token`] -- cryptographically random session token generation.
//! - [`session`] -- session validation with lazy expiry.

pub mod password;
pub mod session;
pub mod token;
