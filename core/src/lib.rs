//! In-memory todo storage for the todo service.
//!
//! # Overview
//! `TodoRepository` owns every `Todo` record, assigns ids and timestamps, and
//! serializes all mutations behind one lock. The HTTP layer lives in the
//! `todo-server` crate; this crate does no I/O and has no async runtime.
//!
//! # Design
//! - One coarse `RwLock` guards the map and the id counter together.
//! - Ids start at 1, only grow, and are never reused after delete.
//! - Callers get clones; the repository keeps the canonical record.
//! - Errors are typed (`RepositoryError`) and left to the caller to map.

pub mod error;
pub mod repository;
pub mod types;

pub use error::RepositoryError;
pub use repository::TodoRepository;
pub use types::{CreateTodo, Todo, TodoId, UpdateTodo};
