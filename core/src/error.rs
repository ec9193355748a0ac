//! Error types for store lookups.
//!
//! # Design
//! Both variants are not-found outcomes, expected and recoverable. The
//! service folds them into failed envelopes; nothing in the core is fatal.

use thiserror::Error;

/// Result type alias using [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;

/// Not-found signals returned by `TodoStore` operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No item carries the requested id.
    #[error("todo {id} not found")]
    NotFound { id: u64 },

    /// A search ran but no item satisfied both criteria.
    #[error("no todo matched the search")]
    NoMatches,
}
