//! Partial-update support: validated change sets and the dynamic UPDATE
//! statement built from them.
//!
//! # Design
//! The SQL text varies with the fields a caller supplied, but values never
//! enter the text. `UpdateStatement::build` walks the change set in a fixed
//! column order, appends one `column = $n` per present field, records the
//! value in `binds` at the same position, and finally appends the id as the
//! last placeholder of the WHERE clause.

use thiserror::Error;
use todo_core::{Patch, Todo, UpdateTodo};

use crate::store::postgres::COLUMNS;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidChanges {
    #[error("Nothing to update")]
    Empty,

    #[error("{0} cannot be null")]
    Null(&'static str),

    #[error("title cannot be empty")]
    EmptyTitle,
}

/// The set of columns an update will touch. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoChanges {
    title: Option<String>,
    completed: Option<bool>,
}

impl TodoChanges {
    /// Present fields as `(column, value)` pairs, in statement order.
    pub fn columns(&self) -> Vec<(&'static str, BindValue)> {
        let mut columns = Vec::with_capacity(2);
        if let Some(title) = &self.title {
            columns.push(("title", BindValue::Text(title.clone())));
        }
        if let Some(completed) = self.completed {
            columns.push(("completed", BindValue::Bool(completed)));
        }
        columns
    }

    /// Apply the change set to an in-memory record.
    pub fn apply(&self, todo: &mut Todo) {
        if let Some(title) = &self.title {
            todo.title.clone_from(title);
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

impl TryFrom<UpdateTodo> for TodoChanges {
    type Error = InvalidChanges;

    fn try_from(input: UpdateTodo) -> Result<Self, Self::Error> {
        if input.is_empty() {
            return Err(InvalidChanges::Empty);
        }

        let title = match input.title {
            Patch::Absent => None,
            Patch::Null => return Err(InvalidChanges::Null("title")),
            Patch::Value(title) if title.is_empty() => return Err(InvalidChanges::EmptyTitle),
            Patch::Value(title) => Some(title),
        };
        let completed = match input.completed {
            Patch::Absent => None,
            Patch::Null => return Err(InvalidChanges::Null("completed")),
            Patch::Value(completed) => Some(completed),
        };

        Ok(TodoChanges { title, completed })
    }
}

/// A value bound to one placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    Bool(bool),
    BigInt(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatement {
    pub sql: String,
    /// `binds[i]` belongs to placeholder `$i+1`.
    pub binds: Vec<BindValue>,
}

impl UpdateStatement {
    pub fn build(table: &str, id: i64, changes: &TodoChanges) -> Self {
        let mut assignments = Vec::new();
        let mut binds = Vec::new();

        for (column, value) in changes.columns() {
            binds.push(value);
            assignments.push(format!("{column} = ${}", binds.len()));
        }

        binds.push(BindValue::BigInt(id));
        let sql = format!(
            "UPDATE {table} SET {} WHERE id = ${} RETURNING {COLUMNS}",
            assignments.join(", "),
            binds.len(),
        );

        UpdateStatement { sql, binds }
    }
}
