//! Activity log DTO.
//!
//! The audit trail is write-only from this service; entries are
//! immutable and reviewed directly in the database.

/// DTO for appending an activity log entry.
pub struct NewActivityLog {
    pub username: String,
    pub action: String,
    pub description: String,
}
