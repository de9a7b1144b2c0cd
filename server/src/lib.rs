//! HTTP CRUD service for a single `todos` table.
//!
//! # Overview
//! `app` wires the path-to-handler table over a shared `TodoStore`;
//! `serve` is the whole process: connect, verify, bind, serve.
//!
//! # Design
//! - Handlers close over an explicit store handle passed as router state;
//!   there is no process-wide singleton.
//! - Every handler issues one store call, and `PgStore` turns each call into
//!   one SQL statement.
//! - The router is storage-agnostic so tests drive it over `MemoryStore`.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod store;
pub mod update;

use std::sync::Arc;

use axum::{
    routing::{any, get},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{ApiError, StartupError};
pub use store::{MemoryStore, PgStore, SharedStore, TodoStore};
pub use todo_core::Todo;

pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/todos",
            get(handlers::list_todos)
                .post(handlers::create_todo)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo)
                .fallback(handlers::method_not_allowed),
        )
        .route("/todos/", any(handlers::invalid_id))
        .route("/todos/{id}/{*rest}", any(handlers::invalid_id))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

/// Connect to the configured database, then serve until the listener fails.
/// No traffic is accepted until the database has answered a ping.
pub async fn serve(config: Config) -> Result<(), StartupError> {
    let pool = db::connect(&config.database_url, config.max_connections).await?;
    let store: SharedStore = Arc::new(PgStore::new(pool, config.table.as_str()));

    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    tracing::info!(%addr, table = %config.table, "listening");

    run(listener, store).await.map_err(StartupError::Serve)
}
