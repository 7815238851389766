//! In-process store owning every `TodoItem`.
//!
//! # Design
//! `TodoStore` is a clonable handle around `Arc<RwLock<Inner>>`. The id
//! counter lives inside the same lock as the map, so id assignment and the
//! insert that follows are one atomic step, and ids are never handed out
//! twice even after the item is deleted. Every mutation does its lookup and
//! its write under a single write guard; an update racing a delete on the
//! same id therefore sees either the item or its absence, never a torn state.

use std::{collections::BTreeMap, sync::Arc};

use tokio::sync::RwLock;
use tracing::debug;

use crate::error::StoreError;
use crate::types::{TodoItem, TodoItemInput};

#[derive(Debug)]
struct Inner {
    items: BTreeMap<i64, TodoItem>,
    next_id: i64,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// Shared handle to the todo collection.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    inner: Arc<RwLock<Inner>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All items, ordered by id.
    pub async fn list(&self) -> Vec<TodoItem> {
        self.inner.read().await.items.values().cloned().collect()
    }

    /// Items with `is_complete` set, ordered by id.
    pub async fn list_complete(&self) -> Vec<TodoItem> {
        self.inner
            .read()
            .await
            .items
            .values()
            .filter(|item| item.is_complete)
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: i64) -> Result<TodoItem, StoreError> {
        self.inner
            .read()
            .await
            .items
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Stores a new item built from `input` and returns it. Any id carried
    /// by `input` is ignored.
    pub async fn create(&self, input: TodoItemInput) -> TodoItem {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let item = TodoItem {
            id,
            name: input.name,
            is_complete: input.is_complete,
            secret: None,
        };
        inner.items.insert(id, item.clone());
        debug!(id, "created todo item");
        item
    }

    /// Overwrites `name` and `is_complete` of the item stored under `id`.
    pub async fn update(&self, id: i64, input: TodoItemInput) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let item = inner.items.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        item.name = input.name;
        item.is_complete = input.is_complete;
        debug!(id, is_complete = item.is_complete, "updated todo item");
        Ok(())
    }

    /// Like [`update`](Self::update), but first requires the id embedded in
    /// `input` to equal `id`.
    pub async fn update_matching(&self, id: i64, input: TodoItemInput) -> Result<(), StoreError> {
        if input.id != Some(id) {
            return Err(StoreError::IdMismatch {
                path: id,
                body: input.id,
            });
        }
        self.update(id, input).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.items.remove(&id).ok_or(StoreError::NotFound(id))?;
        debug!(id, "deleted todo item");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[tokio::test]
    async fn create_assigns_sequential_ids_from_one() {
        let store = TodoStore::new();
        let a = store.create(TodoItemInput::new("a", false)).await;
        let b = store.create(TodoItemInput::new("b", true)).await;
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn create_ignores_caller_id() {
        let store = TodoStore::new();
        let item = store.create(TodoItemInput::new("a", false).with_id(99)).await;
        assert_eq!(item.id, 1);
        assert!(item.secret.is_none());
        assert_eq!(store.get(99).await, Err(StoreError::NotFound(99)));
    }

    #[tokio::test]
    async fn get_after_create_returns_same_fields() {
        let store = TodoStore::new();
        let created = store.create(TodoItemInput::new("wash car", false)).await;
        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name.as_deref(), Some("wash car"));
        assert!(!fetched.is_complete);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = TodoStore::new();
        let first = store.create(TodoItemInput::new("a", false)).await;
        store.delete(first.id).await.unwrap();
        let second = store.create(TodoItemInput::new("b", false)).await;
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn list_complete_is_filtered_subset_of_list() {
        let store = TodoStore::new();
        store.create(TodoItemInput::new("a", true)).await;
        store.create(TodoItemInput::new("b", false)).await;
        store.create(TodoItemInput::new("c", true)).await;

        let all = store.list().await;
        let expected: Vec<TodoItem> = all.iter().filter(|i| i.is_complete).cloned().collect();
        let complete = store.list_complete().await;
        assert_eq!(complete, expected);
        assert_eq!(complete.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[tokio::test]
    async fn update_overwrites_name_and_completion() {
        let store = TodoStore::new();
        let item = store.create(TodoItemInput::new("wash car", false)).await;
        store
            .update(item.id, TodoItemInput::new("wash car", true))
            .await
            .unwrap();
        let fetched = store.get(item.id).await.unwrap();
        assert!(fetched.is_complete);
        assert_eq!(fetched.id, item.id);
    }

    #[tokio::test]
    async fn update_with_absent_name_clears_it() {
        let store = TodoStore::new();
        let item = store.create(TodoItemInput::new("a", false)).await;
        store.update(item.id, TodoItemInput::default()).await.unwrap();
        assert!(store.get(item.id).await.unwrap().name.is_none());
    }

    #[tokio::test]
    async fn update_missing_leaves_collection_unchanged() {
        let store = TodoStore::new();
        store.create(TodoItemInput::new("a", false)).await;
        let before = store.list().await;
        let err = store.update(42, TodoItemInput::new("b", true)).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound(42));
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn update_matching_rejects_mismatched_id() {
        let store = TodoStore::new();
        let item = store.create(TodoItemInput::new("a", false)).await;
        let err = store
            .update_matching(item.id, TodoItemInput::new("b", true).with_id(item.id + 1))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::IdMismatch {
                path: item.id,
                body: Some(item.id + 1)
            }
        );
        assert_eq!(store.get(item.id).await.unwrap().name.as_deref(), Some("a"));
    }

    #[tokio::test]
    async fn update_matching_rejects_missing_body_id() {
        let store = TodoStore::new();
        let item = store.create(TodoItemInput::new("a", false)).await;
        let err = store
            .update_matching(item.id, TodoItemInput::new("b", true))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::IdMismatch { body: None, .. }));
    }

    #[tokio::test]
    async fn update_matching_checks_id_before_existence() {
        let store = TodoStore::new();
        let err = store
            .update_matching(5, TodoItemInput::new("b", true).with_id(6))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::IdMismatch { .. }));

        let err = store
            .update_matching(5, TodoItemInput::new("b", true).with_id(5))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound(5));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let store = TodoStore::new();
        let item = store.create(TodoItemInput::new("a", false)).await;
        store.delete(item.id).await.unwrap();
        assert_eq!(store.get(item.id).await, Err(StoreError::NotFound(item.id)));
        assert_eq!(store.delete(item.id).await, Err(StoreError::NotFound(item.id)));
        assert!(store.is_empty().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_get_distinct_ids() {
        let store = TodoStore::new();
        let handles: Vec<_> = (0..200)
            .map(|n| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .create(TodoItemInput::new(format!("item {n}"), n % 2 == 0))
                        .await
                        .id
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.unwrap()));
        }
        assert_eq!(ids.len(), 200);
        assert_eq!(store.len().await, 200);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn delete_racing_update_resolves_cleanly() {
        for _ in 0..50 {
            let store = TodoStore::new();
            let id = store.create(TodoItemInput::new("a", false)).await.id;

            let deleter = {
                let store = store.clone();
                tokio::spawn(async move { store.delete(id).await })
            };
            let updater = {
                let store = store.clone();
                tokio::spawn(async move { store.update(id, TodoItemInput::new("b", true)).await })
            };

            assert!(deleter.await.unwrap().is_ok());
            match updater.await.unwrap() {
                Ok(()) | Err(StoreError::NotFound(_)) => {}
                Err(other) => panic!("unexpected error: {other}"),
            }
            assert_eq!(store.get(id).await, Err(StoreError::NotFound(id)));
        }
    }
}
