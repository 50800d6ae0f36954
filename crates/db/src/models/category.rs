//! Product category model.

use serde::Serialize;
use sqlx::FromRow;
use bengkel_core::types::DbId;

/// A row from the `category` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}
