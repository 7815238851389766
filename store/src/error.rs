//! Error type for store operations.
//!
//! # Design
//! Both variants are caller errors; the store itself has no failure modes.
//! The HTTP layer maps `NotFound` to 404 and `IdMismatch` to 400.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No item is stored under this id.
    #[error("todo item {0} not found")]
    NotFound(i64),

    /// The id embedded in an update body does not match the addressed item.
    #[error("body id {body:?} does not match path id {path}")]
    IdMismatch { path: i64, body: Option<i64> },
}
