//! Todo validation and mutation core.
//!
//! # Overview
//! `TodoService` implements the rules for creating, listing and updating
//! todos on top of any `TodoStore`. Nothing here knows about HTTP; a
//! transport deserializes requests into `TodoInput`, calls the service, and
//! maps `ServiceError` onto its own responses.
//!
//! # Design
//! - The store is constructed by the caller and moved into the service.
//! - `MemoryStore` is the bundled store: insertion-ordered and `RwLock`-guarded.
//! - Ids are server-generated UUID v4 strings; client ids are never persisted.

pub mod error;
pub mod service;
pub mod store;
pub mod types;

pub use error::{ServiceError, StoreError};
pub use service::TodoService;
pub use store::{MemoryStore, TodoStore};
pub use types::{Todo, TodoInput};
