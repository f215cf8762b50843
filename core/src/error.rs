//! Error types for the todo store and service.
//!
//! # Design
//! `ServiceError` carries exactly the outcomes a transport needs to tell
//! apart: a rejected input, a missing record, and a store that failed on its
//! own. Neither validation nor not-found is recovered from inside the
//! service; both propagate to whoever called it.

/// Failure raised by a `TodoStore` implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A lock guarding the store was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,

    /// Backend-specific failure.
    #[error("store backend failed: {0}")]
    Backend(String),
}

/// Errors returned by `TodoService` operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The input broke a business rule (e.g. missing text).
    #[error("{0}")]
    Validation(String),

    /// No todo exists for the requested id.
    #[error("Todo not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}
