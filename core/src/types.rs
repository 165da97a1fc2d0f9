//! Domain types for the todo service.
//!
//! # Design
//! `Todo` is the stored record and the wire representation at once; the
//! server-assigned fields (`id`, `created_at`, `updated_at`) never appear in
//! the input payloads, so a client cannot smuggle them in. Unknown JSON fields
//! are ignored by serde, which is how caller-supplied ids and timestamps get
//! dropped on create.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the repository. Starts at 1 and is never reused.
pub type TodoId = u64;

/// A single todo item as stored by the repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for updating an existing todo.
///
/// `title` is applied only when present and non-empty. `completed` is always
/// written: a body without it carries `false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl CreateTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
        }
    }
}

impl UpdateTodo {
    pub fn new(title: Option<&str>, completed: bool) -> Self {
        Self {
            title: title.map(str::to_string),
            completed,
        }
    }
}
