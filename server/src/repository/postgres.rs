use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::FromRow;
use tracing::{debug, warn};

use super::Repository;
use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::model::{NewTodo, Todo};

const CREATE_SEQUENCE: &str = "CREATE SEQUENCE IF NOT EXISTS todo_id";

const CREATE_TABLE: &str = "
CREATE TABLE IF NOT EXISTS todo (
  id serial PRIMARY KEY,
  title text NOT NULL,
  note text,
  due_date timestamp with time zone
)";

const INSERT_TODO: &str = "
INSERT INTO todo (id, title, note, due_date)
VALUES (nextval('todo_id'), $1, $2, $3)
RETURNING id";

const DELETE_TODO: &str = "DELETE FROM todo WHERE id = $1";

const SELECT_ALL: &str = "SELECT id, title, note, due_date FROM todo ORDER BY id";

#[derive(FromRow)]
struct TodoRow {
    id: i32,
    title: String,
    note: Option<String>,
    due_date: Option<DateTime<Utc>>,
}

impl TodoRow {
    /// `timestamptz` keeps only the instant, so due dates are shown in `timezone`.
    fn into_todo(self, timezone: FixedOffset) -> Todo {
        Todo {
            id: self.id,
            title: self.title,
            note: self.note.unwrap_or_default(),
            due_date: self.due_date.map(|ts| ts.with_timezone(&timezone)),
        }
    }
}

/// Todo store backed by the Postgres `todo` table.
#[derive(Debug, Clone)]
pub struct PgRepository {
    pool: PgPool,
    timezone: FixedOffset,
}

impl PgRepository {
    /// Due dates read back in UTC. See [`with_timezone`](Self::with_timezone).
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            timezone: Utc.fix(),
        }
    }

    pub fn with_timezone(mut self, timezone: FixedOffset) -> Self {
        self.timezone = timezone;
        self
    }

    /// Open a pool. Fails if the first connection cannot be established.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect(&config.url)
            .await?;
        Ok(Self::new(pool).with_timezone(config.timezone))
    }

    /// Like [`connect`](Self::connect), but keeps trying while the database
    /// comes up. Returns the last error once `connect_attempts` are used.
    pub async fn connect_with_retry(config: &DatabaseConfig) -> Result<Self> {
        let attempts = config.connect_attempts.max(1);
        let mut attempt = 1;
        loop {
            match Self::connect(config).await {
                Ok(repo) => {
                    debug!(attempt, "connected to database");
                    return Ok(repo);
                }
                Err(err) if attempt < attempts => {
                    warn!(attempt, attempts, error = %err, "database connection failed, retrying");
                    tokio::time::sleep(config.connect_retry_delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Create the id sequence and the `todo` table if they are missing.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_SEQUENCE).execute(&self.pool).await?;
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Drop every row and restart ids at 1.
    pub async fn reset(&self) -> Result<()> {
        sqlx::query("DROP TABLE IF EXISTS todo").execute(&self.pool).await?;
        sqlx::query(CREATE_SEQUENCE).execute(&self.pool).await?;
        sqlx::query("ALTER SEQUENCE todo_id RESTART WITH 1")
            .execute(&self.pool)
            .await?;
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn close(&self) {
        self.pool.close().await;
    }

    async fn insert(&self, todo: &NewTodo) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(INSERT_TODO)
            .bind(&todo.title)
            .bind(&todo.note)
            .bind(todo.due_date.map(|ts| ts.with_timezone(&Utc)))
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn delete(&self, id: i32) -> Result<()> {
        sqlx::query(DELETE_TODO).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Todo>> {
        let rows = sqlx::query_as::<_, TodoRow>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(|row| row.into_todo(self.timezone))
            .collect())
    }
}
