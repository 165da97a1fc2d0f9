//! Error types for repository operations.
//!
//! # Design
//! The repository performs no I/O, so there are no transient failures: every
//! error is a deterministic consequence of the input. `NotFound` carries the
//! requested id so the transport layer can report it without re-threading the
//! request.

use thiserror::Error;

use crate::types::TodoId;

/// Errors returned by `TodoRepository` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The input failed validation, e.g. an empty title on create.
    #[error("validation failed: {0}")]
    Validation(String),

    /// No todo with this id exists (never issued, or already deleted).
    #[error("todo {0} not found")]
    NotFound(TodoId),
}
