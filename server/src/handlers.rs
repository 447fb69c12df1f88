//! HTTP routes for the todo API.
//!
//! | Method | Path     | Success                |
//! |--------|----------|------------------------|
//! | GET    | /samples | 200, fixture todos     |
//! | GET    | /todo    | 200, stored todos      |
//! | POST   | /todo    | 200, id of new todo    |
//! | DELETE | /todo    | 200, empty body        |
//!
//! Any other method on `/todo` is a 404. Failures carry `{"error": msg}`.
//! Request bodies are parsed from raw bytes, so a missing or wrong
//! `Content-Type` is not itself an error.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::error::TodoError;
use crate::model::{DeleteTodo, NewTodo, Todo};
use crate::repository::{Repository, SampleRepository};
use crate::service::TodoService;

/// Services wired to each route.
#[derive(Clone)]
pub struct AppState {
    pub todos: TodoService,
    pub samples: TodoService,
}

impl AppState {
    /// Serve `/todo` from `todos` and `/samples` from the fixture store.
    pub fn new(todos: Arc<dyn Repository>) -> Self {
        Self {
            todos: TodoService::new(todos),
            samples: TodoService::new(Arc::new(SampleRepository)),
        }
    }
}

/// Errors a handler turns into an HTTP response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] TodoError),

    #[error("not found")]
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Store(err) => {
                error!(error = %err, "store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::NotFound => (StatusCode::NOT_FOUND, String::new()),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/samples", get(list_samples))
        .route(
            "/todo",
            get(list_todos)
                .post(create_todo)
                .delete(delete_todo)
                .fallback(unknown_method),
        )
        .with_state(state)
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(e.to_string()))
}

async fn list_samples(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.samples.list_all().await?))
}

async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.todos.list_all().await?))
}

async fn create_todo(State(state): State<AppState>, body: Bytes) -> Result<Json<i32>, ApiError> {
    let todo: Todo = parse_body(&body)?;
    let id = state.todos.insert(&NewTodo::from(todo)).await?;
    Ok(Json(id))
}

async fn delete_todo(State(state): State<AppState>, body: Bytes) -> Result<StatusCode, ApiError> {
    let req: DeleteTodo = parse_body(&body)?;
    state.todos.delete(req.id).await?;
    Ok(StatusCode::OK)
}

async fn unknown_method() -> ApiError {
    ApiError::NotFound
}
