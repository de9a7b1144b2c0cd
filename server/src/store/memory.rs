//! In-process store with the same observable behavior as `PgStore`.
//!
//! Ids start at 1 and are never reused, matching a serial column.
//! `created_at` uses the `timestamp::text` shape PostgreSQL returns.

use std::collections::BTreeMap;

use async_trait::async_trait;
use time::{format_description::BorrowedFormatItem, macros::format_description, OffsetDateTime};
use todo_core::Todo;
use tokio::sync::RwLock;

use super::{StoreError, TodoStore};
use crate::update::TodoChanges;

const CREATED_AT_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]");

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    todos: BTreeMap<i64, Todo>,
    last_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.todos.values().cloned().collect())
    }

    async fn create(&self, title: &str) -> Result<Todo, StoreError> {
        let created_at = OffsetDateTime::now_utc().format(CREATED_AT_FORMAT)?;
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let todo = Todo {
            id: inner.last_id,
            title: title.to_string(),
            completed: false,
            created_at,
        };
        inner.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn get(&self, id: i64) -> Result<Option<Todo>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.todos.get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(u64::from(inner.todos.remove(&id).is_some()))
    }

    async fn update(&self, id: i64, changes: &TodoChanges) -> Result<Option<Todo>, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.todos.get_mut(&id).map(|todo| {
            changes.apply(todo);
            todo.clone()
        }))
    }
}
