//! Client-side DTOs for the todo API.
//!
//! # Design
//! Defined independently of the server crate. Due dates stay strings here:
//! the client forwards whatever the user typed and the server validates it.

use serde::{Deserialize, Serialize};

/// A todo as returned by `GET /todo` and `GET /samples`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Request payload for `POST /todo`. Absent optional fields are left out of
/// the JSON entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Request payload for `DELETE /todo`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteTodo {
    pub id: i32,
}

/// The `{"error": ...}` body the server sends with failures.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
