//! Error types for the todo server.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TodoError>;

/// Failures raised by the store, startup and configuration.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
