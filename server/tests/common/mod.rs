//! In-process repositories for exercising the router without a database.

use std::sync::Mutex;

use async_trait::async_trait;
use todo_server::{NewTodo, Repository, Result, Todo, TodoError};

/// Keeps todos in a vector and hands out ids from a counter starting at 1,
/// like the `todo_id` sequence on a fresh table. Offsets are kept as given.
#[derive(Default)]
pub struct MemoryRepository {
    inner: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    next_id: i32,
    todos: Vec<Todo>,
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn close(&self) {}

    async fn insert(&self, todo: &NewTodo) -> Result<i32> {
        let mut state = self.inner.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        state.todos.push(Todo {
            id,
            title: todo.title.clone(),
            note: todo.note.clone(),
            due_date: todo.due_date,
        });
        Ok(id)
    }

    async fn delete(&self, id: i32) -> Result<()> {
        self.inner.lock().unwrap().todos.retain(|todo| todo.id != id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Todo>> {
        let mut todos = self.inner.lock().unwrap().todos.clone();
        todos.sort_by_key(|todo| todo.id);
        Ok(todos)
    }
}

/// Fails every operation, standing in for a store that went away.
pub struct FailingRepository;

fn unavailable() -> TodoError {
    TodoError::Io(std::io::Error::other("store unavailable"))
}

#[async_trait]
impl Repository for FailingRepository {
    async fn close(&self) {}

    async fn insert(&self, _todo: &NewTodo) -> Result<i32> {
        Err(unavailable())
    }

    async fn delete(&self, _id: i32) -> Result<()> {
        Err(unavailable())
    }

    async fn list_all(&self) -> Result<Vec<Todo>> {
        Err(unavailable())
    }
}
