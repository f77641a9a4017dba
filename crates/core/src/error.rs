use crate::types::DbId;

/// Domain-level error type shared by the db and api crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by id came up empty.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed domain validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A uniqueness or concurrent-modification conflict.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// An unexpected internal failure. The message is logged server-side
    /// and never shown to callers verbatim.
    #[error("Internal error: {0}")]
    Internal(String),
}
