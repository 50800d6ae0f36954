//! Shared domain primitives for the Bengkel POS backend.
//!
//! Kept deliberately small: database type aliases and the checkout
//! total computation. Everything HTTP- or Postgres-specific lives in
//! `bengkel-api` / `bengkel-db`.

pub mod checkout;
pub mod types;
