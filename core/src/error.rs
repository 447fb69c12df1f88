//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the server answers unknown
//! methods on `/todo` with 404. Every other non-200 answer lands in `Server`
//! with the server's `{"error"}` text, or the raw body when there is none.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status other than 200 or 404.
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
