//! Error taxonomy for the HTTP layer and for process startup.
//!
//! # Design
//! Every request-level failure becomes an `ApiError`, which renders as a
//! status code plus a short plain-text body. Storage failures keep their
//! source for the log but only the handler's context string reaches the
//! client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::ConnectError;
use crate::store::StoreError;
use crate::update::InvalidChanges;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input.
    #[error("{0}")]
    Validation(String),

    /// No row matches the identifier.
    #[error("{0}")]
    NotFound(&'static str),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// A query failed; `context` is what the client sees.
    #[error("{context}")]
    Storage {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    /// Adapter for `map_err` that tags a storage failure with a client-facing
    /// message.
    pub fn storage(context: &'static str) -> impl FnOnce(StoreError) -> ApiError {
        move |source| ApiError::Storage { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<InvalidChanges> for ApiError {
    fn from(err: InvalidChanges) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Storage { context, source } => {
                tracing::error!(error = %source, "{context}");
            }
            other => tracing::debug!(status = %other.status(), "{other}"),
        }
        (self.status(), self.to_string()).into_response()
    }
}

/// Fatal conditions that stop the process before or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Connect(#[from] ConnectError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
