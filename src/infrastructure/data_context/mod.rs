//! Data contexts: the boundary between repositories and a backing store.
//!
//! A [`DataContext`] exposes the persisted blog rows, tracks changes staged by
//! the caller and commits them on an explicit [`DataContext::save_changes`].
//!
//! # Adapters
//!
//! - [`PgDataContext`] - PostgreSQL through an SQLx connection pool
//! - [`InMemoryDataContext`] - named process-local store used for tests and
//!   database-less runs
//!
//! Use [`open_data_context`] to pick the adapter from [`DataContextOptions`].

mod change_tracker;
mod memory;
mod options;
mod postgres;

pub use change_tracker::{ChangeTracker, PendingChange};
pub use memory::InMemoryDataContext;
pub use options::{DataContextOptions, PostgresOptions, StorageBackend};
pub use postgres::PgDataContext;

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::{Blog, NewBlog};
use crate::error::AppError;

/// Handle to a backing store holding blog rows.
///
/// Dropping a context releases it. [`DataContext::close`] does the same
/// explicitly and waits for backend resources to be freed.
#[async_trait]
pub trait DataContext: Send + Sync {
    /// Returns every persisted row in the store's natural order.
    ///
    /// Staged changes are not visible until saved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn blogs(&self) -> Result<Vec<Blog>, AppError>;

    /// Stages an insert.
    async fn add(&self, blog: NewBlog);

    /// Stages a full-row update keyed by `blog.id`.
    async fn update(&self, blog: Blog);

    /// Stages a delete.
    async fn remove(&self, id: i64);

    /// Number of changes staged since the last successful save.
    async fn pending_changes(&self) -> usize;

    /// Commits every staged change as one batch.
    ///
    /// Returns the number of rows written. On failure nothing is committed and
    /// the staged changes are kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if an update or remove targets a missing row.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn save_changes(&self) -> Result<usize, AppError>;

    /// Checks if the backend answers.
    async fn health_check(&self) -> bool;

    /// Discards staged changes and releases backend resources.
    async fn close(&self);
}

/// Opens a data context for the configured backend.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the PostgreSQL pool cannot be created
/// or migrations fail.
pub async fn open_data_context(
    options: DataContextOptions,
) -> Result<Arc<dyn DataContext>, AppError> {
    tracing::debug!(backend = options.backend_name(), "Opening data context");

    match options.backend {
        StorageBackend::Postgres(pg) => Ok(Arc::new(PgDataContext::connect(&pg).await?)),
        StorageBackend::InMemory { name } => Ok(Arc::new(InMemoryDataContext::open(&name).await)),
    }
}
