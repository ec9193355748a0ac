//! In-memory todo store and the operations the HTTP layer calls into.
//!
//! # Overview
//! The crate is synchronous and free of I/O. Requests arrive as method calls
//! with already-parsed parameters; every call returns an `ApiResponse`
//! envelope the transport serializes to JSON.
//!
//! # Design
//! - `TodoStore` holds the ordered items and the id counter.
//! - `TodoService` wraps one store in a mutex and maps store outcomes
//!   (found, not found, collection) to envelopes.
//! - Not-found is a `StoreError`, never a panic and never a transport error.

pub mod error;
pub mod response;
pub mod service;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use response::ApiResponse;
pub use service::TodoService;
pub use store::TodoStore;
pub use types::{CreateTodo, ReplaceTodo, SearchQuery, TodoItem, UpdateStatus};
