//! Request handlers.
//!
//! Each submodule provides async handler functions for a single
//! resource. Handlers validate input, delegate to the repositories in
//! `bengkel_db` (or the storage client), and wrap results in the
//! response envelope; failures map through [`crate::error::AppError`].

pub mod auth;
pub mod categories;
pub mod client_config;
pub mod dashboard;
pub mod health;
pub mod products;
pub mod sales;
pub mod storage;
pub mod upload;
pub mod vehicle_types;
