//! Thread-safe in-memory store that owns every `Todo`.
//!
//! # Design
//! A single reader/writer lock guards both the record map and the id
//! counter, so id assignment and insertion happen in one critical section.
//! Reads share the lock; every mutation takes it exclusively. Callers only
//! ever receive clones of the stored records.
//!
//! The lock never poisons, and no operation re-enters the repository while
//! holding it.

use std::collections::HashMap;

use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;

use crate::error::RepositoryError;
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};

#[derive(Debug)]
struct Store {
    todos: HashMap<TodoId, Todo>,
    next_id: TodoId,
}

/// The authoritative set of todo records.
///
/// Construct one per process and share it by `Arc`.
#[derive(Debug)]
pub struct TodoRepository {
    store: RwLock<Store>,
}

impl TodoRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                todos: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Snapshot of every stored todo, in no particular order.
    pub fn list_all(&self) -> Vec<Todo> {
        self.store.read().todos.values().cloned().collect()
    }

    pub fn get_by_id(&self, id: TodoId) -> Result<Todo, RepositoryError> {
        self.store
            .read()
            .todos
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    /// Store a new todo with the next id and fresh timestamps.
    ///
    /// An empty title is rejected before the lock is taken, so a failed
    /// create never consumes an id.
    pub fn create(&self, input: CreateTodo) -> Result<Todo, RepositoryError> {
        if input.title.is_empty() {
            return Err(RepositoryError::Validation(
                "title must not be empty".to_string(),
            ));
        }

        let mut store = self.store.write();
        let now = Utc::now();
        let todo = Todo {
            id: store.next_id,
            title: input.title,
            completed: input.completed,
            created_at: now,
            updated_at: now,
        };
        store.next_id += 1;
        store.todos.insert(todo.id, todo.clone());
        debug!(id = todo.id, "todo created");
        Ok(todo)
    }

    /// Apply `patch` to an existing todo.
    ///
    /// A non-empty `title` replaces the stored one; `completed` is always
    /// overwritten. `id` and `created_at` are left alone.
    pub fn update(&self, id: TodoId, patch: UpdateTodo) -> Result<Todo, RepositoryError> {
        let mut store = self.store.write();
        let todo = store
            .todos
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound(id))?;

        if let Some(title) = patch.title.filter(|t| !t.is_empty()) {
            todo.title = title;
        }
        todo.completed = patch.completed;
        todo.updated_at = Utc::now();
        debug!(id, completed = todo.completed, "todo updated");
        Ok(todo.clone())
    }

    pub fn delete(&self, id: TodoId) -> Result<(), RepositoryError> {
        self.store
            .write()
            .todos
            .remove(&id)
            .ok_or(RepositoryError::NotFound(id))?;
        debug!(id, "todo deleted");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.store.read().todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TodoRepository {
    fn default() -> Self {
        Self::new()
    }
}
