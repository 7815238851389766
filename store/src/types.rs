//! Domain types for the todo item store.
//!
//! # Design
//! `TodoItem` is the persisted entity and is never serialized as a whole:
//! handlers project it into `TodoItemView` before it leaves the process, so
//! `secret` stays inside the store. `TodoItemInput` is the body accepted by
//! create and update. The wire format uses camelCase keys.

use serde::{Deserialize, Serialize};

/// A stored todo item. Only `name` and `is_complete` change after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: i64,
    pub name: Option<String>,
    pub is_complete: bool,
    /// Held for administrative tooling; never exposed over the API.
    pub secret: Option<String>,
}

/// Public projection of a `TodoItem`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemView {
    pub id: i64,
    pub name: Option<String>,
    pub is_complete: bool,
}

impl From<&TodoItem> for TodoItemView {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            is_complete: item.is_complete,
        }
    }
}

impl From<TodoItem> for TodoItemView {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            is_complete: item.is_complete,
        }
    }
}

/// Request payload for creating or replacing a todo item.
///
/// `id` is only read by the controller-style update, which compares it with
/// the path. Unknown fields such as `secret` are dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "is_complete")]
    pub is_complete: bool,
}

impl TodoItemInput {
    pub fn new(name: impl Into<String>, is_complete: bool) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            is_complete,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
