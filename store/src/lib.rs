//! In-memory store for todo items.
//!
//! # Overview
//! Owns the authoritative collection of `TodoItem` records and serves the
//! five CRUD operations plus the completed-items listing. The HTTP layer
//! lives in the `todo-server` crate and only ever sees `TodoItemView`.
//!
//! # Design
//! - `TodoStore` is an explicit handle, cloned into each request handler.
//! - Ids are assigned by the store, start at 1, and are never reused.
//! - Errors are `StoreError` values; nothing in this crate panics on bad input.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::TodoStore;
pub use types::{TodoItem, TodoItemInput, TodoItemView};
