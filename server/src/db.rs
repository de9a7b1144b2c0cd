//! Storage connector: builds the PostgreSQL pool and proves the backend is
//! reachable before the server accepts traffic.

use std::str::FromStr;

use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    Connection, PgConnection, PgPool,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectError {
    /// The descriptor could not be turned into a pool.
    #[error("failed to open database: {0}")]
    Init(#[source] sqlx::Error),

    /// The pool was built but the backend did not answer the liveness probe.
    #[error("database is unreachable: {0}")]
    Ping(#[source] sqlx::Error),
}

/// Parse `database_url`, ping the backend over a dedicated connection, then
/// hand back a pool built from the same options.
///
/// The probe goes through a single connection rather than the pool because
/// pool acquisition retries refused connections until its timeout.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, ConnectError> {
    let options = PgConnectOptions::from_str(database_url).map_err(ConnectError::Init)?;

    let mut probe = PgConnection::connect_with(&options)
        .await
        .map_err(ConnectError::Ping)?;
    probe.ping().await.map_err(ConnectError::Ping)?;
    if let Err(err) = probe.close().await {
        tracing::debug!(error = %err, "failed to close liveness probe connection");
    }

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy_with(options);

    tracing::info!(max_connections, "connected to database");
    Ok(pool)
}
