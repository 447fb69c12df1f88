//! Thin forwarding layer between the HTTP handlers and a repository.

use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::model::{NewTodo, Todo};
use crate::repository::Repository;

#[derive(Clone)]
pub struct TodoService {
    repository: Arc<dyn Repository>,
}

impl TodoService {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self { repository }
    }

    pub async fn close(&self) {
        debug!("closing repository");
        self.repository.close().await;
    }

    pub async fn insert(&self, todo: &NewTodo) -> Result<i32> {
        debug!(title = %todo.title, "insert");
        self.repository.insert(todo).await
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        debug!(id, "delete");
        self.repository.delete(id).await
    }

    pub async fn list_all(&self) -> Result<Vec<Todo>> {
        debug!("list_all");
        self.repository.list_all().await
    }
}
