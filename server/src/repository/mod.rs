//! Storage behind the todo endpoints.
//!
//! # Design
//! `Repository` is the seam between the HTTP layer and a concrete store.
//! Two stores ship with the server: [`PgRepository`] for the real `todo`
//! table and [`SampleRepository`], a fixed read-only list served under
//! `/samples`. Callers receive the store they need as an explicit
//! `Arc<dyn Repository>` when the router is built.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{NewTodo, Todo};

pub mod postgres;
pub mod samples;

pub use postgres::PgRepository;
pub use samples::SampleRepository;

#[async_trait]
pub trait Repository: Send + Sync {
    /// Release any resources held by the store.
    async fn close(&self);

    /// Store a todo and return the id the store assigned to it.
    async fn insert(&self, todo: &NewTodo) -> Result<i32>;

    /// Remove the todo with `id`. Removing an id that does not exist succeeds.
    async fn delete(&self, id: i32) -> Result<()>;

    /// Every stored todo, ordered by id ascending.
    async fn list_all(&self) -> Result<Vec<Todo>>;
}
