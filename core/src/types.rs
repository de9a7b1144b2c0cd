//! Domain DTOs for the todo API.
//!
//! # Design
//! `Todo` is both the row shape and the JSON shape. `created_at` stays a
//! string: the server hands back whatever text rendering storage produced,
//! with no timezone normalization.

use serde::{Deserialize, Serialize};

use crate::patch::Patch;

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: String,
}

/// Request payload for creating a new todo.
///
/// A missing `title` decodes as an empty string so that absent and empty
/// titles are rejected by the same check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: String,
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are touched; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub title: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub completed: Patch<bool>,
}

impl UpdateTodo {
    /// True when the payload names no field at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_absent() && self.completed.is_absent()
    }
}
