//! Error types for the todo store.
//!
//! # Design
//! None of these reach a `Store` caller. `Store` logs them and skips the
//! callback. They are public because `TodoApi` and `Transport` are usable on
//! their own.

use thiserror::Error;

/// Errors returned by `TodoApi` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with something other than the operation's success
    /// status.
    #[error("expected HTTP {expected}, got {status}: {body}")]
    UnexpectedStatus {
        expected: u16,
        status: u16,
        body: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Errors raised while executing a request.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http: {0}")]
    Http(#[from] ureq::Error),

    /// The blocking worker running the request panicked or was cancelled.
    #[error("request task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// Failure reported by a transport that does not go through ureq.
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
