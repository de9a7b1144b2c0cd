//! Shared data model for the todo service.
//!
//! # Overview
//! Holds the `Todo` record exactly as it travels over the wire, plus the
//! request payloads the server accepts. The server crate decodes database
//! rows directly into `Todo` when the `sqlx` feature is enabled.
//!
//! # Design
//! - `UpdateTodo` fields are `Patch<T>` rather than `Option<T>` so a handler
//!   can tell "field omitted" apart from "field sent as null".
//! - Field names are lower snake case on the wire (`created_at`).

pub mod patch;
pub mod types;

pub use patch::Patch;
pub use types::{CreateTodo, Todo, UpdateTodo};
