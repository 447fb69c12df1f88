use async_trait::async_trait;
use chrono::DateTime;

use super::Repository;
use crate::error::Result;
use crate::model::{NewTodo, Todo};

const SAMPLE_DUE_DATE: &str = "2000-01-01T00:00:00Z";

/// Read-only demo store. Always lists the same three todos; writes are
/// accepted and discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleRepository;

fn sample(id: i32, title: &str) -> Todo {
    Todo {
        id,
        title: title.to_string(),
        note: String::new(),
        due_date: DateTime::parse_from_rfc3339(SAMPLE_DUE_DATE).ok(),
    }
}

#[async_trait]
impl Repository for SampleRepository {
    async fn close(&self) {}

    async fn insert(&self, _todo: &NewTodo) -> Result<i32> {
        Ok(0)
    }

    async fn delete(&self, _id: i32) -> Result<()> {
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Todo>> {
        // Ids are not unique here: "Twitter" shares id 2 with "Do homework".
        Ok(vec![
            sample(1, "Do dishes"),
            sample(2, "Do homework"),
            sample(2, "Twitter"),
        ])
    }
}
