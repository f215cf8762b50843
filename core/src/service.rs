//! Validation and merge rules for todos, layered over a `TodoStore`.
//!
//! # Design
//! `TodoService` owns its store; there is no global repository. Operations are
//! synchronous and return as soon as the store does.
//!
//! - `create` rejects missing or empty text, throws away any client id and
//!   assigns a fresh UUID v4.
//! - `update` takes identity from its `id` argument only. `text` is replaced
//!   when the patch carries one and preserved otherwise; `done` is always
//!   replaced. An empty `text` in a patch is accepted as-is.
//!
//! Writes go through `write_lock` so the find-merge-save in `update` cannot
//! interleave with another writer. Same-id updates are still last-write-wins.
//!
//! Every operation runs on the caller's thread and holds std locks for the
//! duration of the store call. Async callers must only pair this service with
//! stores that answer without blocking (such as `MemoryStore`); a store doing
//! network or disk I/O needs `spawn_blocking` around the calls.

use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use crate::error::{ServiceError, StoreError};
use crate::store::TodoStore;
use crate::types::{Todo, TodoInput};

const TEXT_REQUIRED: &str = "Text is required";

pub struct TodoService<S> {
    store: S,
    write_lock: Mutex<()>,
}

impl<S: TodoStore> TodoService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Every stored todo, in store order.
    pub fn list(&self) -> Result<Vec<Todo>, ServiceError> {
        Ok(self.store.find_all()?)
    }

    pub fn get(&self, id: &str) -> Result<Todo, ServiceError> {
        self.store.find_by_id(id)?.ok_or(ServiceError::NotFound)
    }

    /// Validate `candidate` and persist it under a newly generated id.
    pub fn create(&self, candidate: TodoInput) -> Result<Todo, ServiceError> {
        let text = match candidate.text {
            Some(text) if !text.is_empty() => text,
            _ => {
                tracing::debug!("rejecting todo without text");
                return Err(ServiceError::Validation(TEXT_REQUIRED.to_string()));
            }
        };
        if let Some(client_id) = candidate.id.as_deref() {
            tracing::debug!(client_id, "ignoring client-supplied id on create");
        }

        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            text,
            done: candidate.done,
        };

        let _guard = self.lock_writes()?;
        let saved = self.store.save(todo)?;
        tracing::info!(id = %saved.id, "todo created");
        Ok(saved)
    }

    /// Merge `patch` into the todo stored under `id`.
    pub fn update(&self, id: &str, patch: TodoInput) -> Result<Todo, ServiceError> {
        let _guard = self.lock_writes()?;

        let mut todo = self.store.find_by_id(id)?.ok_or_else(|| {
            tracing::debug!(id, "update target missing");
            ServiceError::NotFound
        })?;

        if let Some(text) = patch.text {
            todo.text = text;
        }
        todo.done = patch.done;

        let saved = self.store.save(todo)?;
        tracing::info!(id = %saved.id, done = saved.done, "todo updated");
        Ok(saved)
    }

    fn lock_writes(&self) -> Result<MutexGuard<'_, ()>, StoreError> {
        self.write_lock.lock().map_err(|_| StoreError::Poisoned)
    }
}
