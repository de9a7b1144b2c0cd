//! PostgreSQL-backed store.

use async_trait::async_trait;
use sqlx::PgPool;
use todo_core::Todo;

use super::{StoreError, TodoStore};
use crate::update::{BindValue, TodoChanges, UpdateStatement};

/// Select list shared by every statement that returns a record. `created_at`
/// is handed back as storage's own text rendering.
pub(crate) const COLUMNS: &str =
    "CAST(id AS BIGINT) AS id, title, completed, CAST(created_at AS TEXT) AS created_at";

/// Statement texts are fixed per table, so they are rendered once.
#[derive(Debug, Clone)]
struct Statements {
    list: String,
    insert: String,
    get: String,
    delete: String,
}

impl Statements {
    fn for_table(table: &str) -> Self {
        Statements {
            list: format!("SELECT {COLUMNS} FROM {table} ORDER BY id"),
            insert: format!("INSERT INTO {table} (title) VALUES ($1) RETURNING {COLUMNS}"),
            get: format!("SELECT {COLUMNS} FROM {table} WHERE id = $1"),
            delete: format!("DELETE FROM {table} WHERE id = $1"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
    table: String,
    sql: Statements,
}

impl PgStore {
    /// `table` is an operator-supplied identifier and is placed in the SQL
    /// text as is.
    pub fn new(pool: PgPool, table: impl Into<String>) -> Self {
        let table = table.into();
        let sql = Statements::for_table(&table);
        PgStore { pool, table, sql }
    }
}

#[async_trait]
impl TodoStore for PgStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = sqlx::query_as::<_, Todo>(&self.sql.list)
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }

    async fn create(&self, title: &str) -> Result<Todo, StoreError> {
        let todo = sqlx::query_as::<_, Todo>(&self.sql.insert)
            .bind(title)
            .fetch_one(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn get(&self, id: i64) -> Result<Option<Todo>, StoreError> {
        let todo = sqlx::query_as::<_, Todo>(&self.sql.get)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let result = sqlx::query(&self.sql.delete)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn update(&self, id: i64, changes: &TodoChanges) -> Result<Option<Todo>, StoreError> {
        let stmt = UpdateStatement::build(&self.table, id, changes);
        tracing::debug!(sql = %stmt.sql, binds = stmt.binds.len(), "update statement");

        let mut query = sqlx::query_as::<_, Todo>(&stmt.sql);
        for value in stmt.binds.iter().cloned() {
            query = match value {
                BindValue::Text(text) => query.bind(text),
                BindValue::Bool(flag) => query.bind(flag),
                BindValue::BigInt(n) => query.bind(n),
            };
        }

        let todo = query.fetch_optional(&self.pool).await?;
        Ok(todo)
    }
}
