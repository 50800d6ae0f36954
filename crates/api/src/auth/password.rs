//! Credential digests.
//!
//! Passwords are stored as unsalted SHA-256 hex digests. The cashier
//! app computes the identical digest client-side before transmission,
//! and every stored credential already uses this format, so switching
//! to a salted scheme requires a coordinated client + data migration.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hex digest of a plaintext password.
///
/// Deterministic: identical plaintexts always produce identical
/// digests. Compare against the stored `users.password` column.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
