//! Persistence contract for todos and the bundled in-memory implementation.
//!
//! # Design
//! `TodoStore` is the only thing the service knows about persistence: save by
//! id, find by id, list everything. Methods take `&self` so a store can be
//! shared behind an `Arc`; implementations own whatever synchronization they
//! need.
//!
//! `MemoryStore` keeps an `IndexMap` so `find_all` returns todos in the order
//! they were first saved. Overwriting an existing id keeps its position.

use std::sync::RwLock;

use indexmap::IndexMap;

use crate::error::StoreError;
use crate::types::Todo;

/// By-id todo persistence.
pub trait TodoStore: Send + Sync {
    /// Insert `todo` if its id is unseen, otherwise overwrite the entry.
    fn save(&self, todo: Todo) -> Result<Todo, StoreError>;

    fn find_by_id(&self, id: &str) -> Result<Option<Todo>, StoreError>;

    /// All todos, in insertion order.
    fn find_all(&self) -> Result<Vec<Todo>, StoreError>;
}

/// In-memory `TodoStore` guarded by a `RwLock`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    todos: RwLock<IndexMap<String, Todo>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let todos = self.todos.read().map_err(|_| StoreError::Poisoned)?;
        Ok(todos.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl TodoStore for MemoryStore {
    fn save(&self, todo: Todo) -> Result<Todo, StoreError> {
        let mut todos = self.todos.write().map_err(|_| StoreError::Poisoned)?;
        todos.insert(todo.id.clone(), todo.clone());
        Ok(todo)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Todo>, StoreError> {
        let todos = self.todos.read().map_err(|_| StoreError::Poisoned)?;
        Ok(todos.get(id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = self.todos.read().map_err(|_| StoreError::Poisoned)?;
        Ok(todos.values().cloned().collect())
    }
}
