//! HTTP/JSON todo service backed by Postgres.
//!
//! # Overview
//! `GET /samples` serves a fixed demo list, `/todo` lists, inserts and
//! deletes rows of the `todo` table. Handlers call a [`TodoService`], which
//! forwards to whichever [`Repository`] the router was built with.
//!
//! # Design
//! - The router is an owned value built by [`build_router`]; nothing is
//!   registered globally, so tests can run many servers side by side.
//! - Repositories are injected as `Arc<dyn Repository>` at construction
//!   time rather than looked up per request.
//! - [`serve`] is the whole production startup: connect (with retries),
//!   create the schema, bind, serve until Ctrl-C, close the pool.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

pub use config::{Config, DatabaseConfig};
pub use error::{Result, TodoError};
pub use handlers::{build_router, ApiError, AppState};
pub use model::{DeleteTodo, NewTodo, Todo};
pub use repository::{PgRepository, Repository, SampleRepository};
pub use service::TodoService;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Serve `state` on an already-bound listener until the process exits.
pub async fn run(listener: TcpListener, state: AppState) -> std::result::Result<(), std::io::Error> {
    axum::serve(listener, build_router(state)).await
}

/// Connect to Postgres, make sure the schema exists and serve until Ctrl-C.
pub async fn serve(config: Config) -> Result<()> {
    config.validate()?;

    let repository = Arc::new(PgRepository::connect_with_retry(&config.database).await?);
    repository.ensure_schema().await?;
    info!("database schema ready");

    let state = AppState::new(repository);
    let listener = TcpListener::bind(&config.listen_addr).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, build_router(state.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.todos.close().await;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl-C, shutting down");
}
