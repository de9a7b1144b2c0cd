//! The storage seam between handlers and the relational backend.
//!
//! Each method maps to exactly one SQL statement in `PgStore`. `MemoryStore`
//! mirrors the same semantics in process for tests.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use todo_core::Todo;

use crate::update::TodoChanges;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to render timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}

#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All records, ascending by id.
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// Insert a record; storage assigns `id`, `created_at` and `completed`.
    async fn create(&self, title: &str) -> Result<Todo, StoreError>;

    async fn get(&self, id: i64) -> Result<Option<Todo>, StoreError>;

    /// Returns the number of rows removed.
    async fn delete(&self, id: i64) -> Result<u64, StoreError>;

    /// Returns the updated record, or `None` if no row has this id.
    async fn update(&self, id: i64, changes: &TodoChanges) -> Result<Option<Todo>, StoreError>;
}

/// Handle shared by every handler.
pub type SharedStore = Arc<dyn TodoStore>;
