//! PostgreSQL data context.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::{debug, info};

use super::{ChangeTracker, DataContext, PendingChange, PostgresOptions};
use crate::domain::entities::{Blog, NewBlog};
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct BlogRow {
    id: i64,
    title: Option<String>,
    content: Option<String>,
}

impl From<BlogRow> for Blog {
    fn from(row: BlogRow) -> Self {
        Blog::new(row.id, row.title, row.content)
    }
}

/// Data context over a PostgreSQL connection pool.
///
/// Staged changes are written inside a single transaction on save.
pub struct PgDataContext {
    pool: PgPool,
    tracker: ChangeTracker,
}

impl PgDataContext {
    /// Wraps an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            tracker: ChangeTracker::new(),
        }
    }

    /// Creates a pool from the options and applies migrations if requested.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the connection or a migration fails.
    pub async fn connect(options: &PostgresOptions) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(options.max_connections)
            .acquire_timeout(options.acquire_timeout)
            .idle_timeout(options.idle_timeout)
            .max_lifetime(options.max_lifetime)
            .connect(&options.url)
            .await?;
        info!("Connected to database");

        if options.run_migrations {
            sqlx::migrate!("./migrations").run(&pool).await?;
            info!("Migrations applied");
        }

        Ok(Self::new(pool))
    }

    /// Underlying pool, for admin tooling.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DataContext for PgDataContext {
    async fn blogs(&self) -> Result<Vec<Blog>, AppError> {
        let rows = sqlx::query_as::<_, BlogRow>("SELECT id, title, content FROM blogs")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Blog::from).collect())
    }

    async fn add(&self, blog: NewBlog) {
        self.tracker.track(PendingChange::Added(blog)).await;
    }

    async fn update(&self, blog: Blog) {
        self.tracker.track(PendingChange::Modified(blog)).await;
    }

    async fn remove(&self, id: i64) {
        self.tracker.track(PendingChange::Removed(id)).await;
    }

    async fn pending_changes(&self) -> usize {
        self.tracker.len().await
    }

    async fn save_changes(&self) -> Result<usize, AppError> {
        let mut pending = self.tracker.lock().await;
        if pending.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;

        for change in pending.iter() {
            let (result, id) = match change {
                PendingChange::Added(new_blog) => {
                    sqlx::query("INSERT INTO blogs (title, content) VALUES ($1, $2)")
                        .bind(new_blog.title.as_deref())
                        .bind(new_blog.content.as_deref())
                        .execute(&mut *tx)
                        .await?;
                    continue;
                }
                PendingChange::Modified(blog) => (
                    sqlx::query("UPDATE blogs SET title = $2, content = $3 WHERE id = $1")
                        .bind(blog.id)
                        .bind(blog.title.as_deref())
                        .bind(blog.content.as_deref())
                        .execute(&mut *tx)
                        .await?,
                    blog.id,
                ),
                PendingChange::Removed(id) => (
                    sqlx::query("DELETE FROM blogs WHERE id = $1")
                        .bind(*id)
                        .execute(&mut *tx)
                        .await?,
                    *id,
                ),
            };

            if result.rows_affected() == 0 {
                tx.rollback().await?;
                return Err(AppError::not_found("Blog not found", json!({"id": id})));
            }
        }

        tx.commit().await?;

        let written = pending.len();
        pending.clear();

        debug!(rows = written, "Saved changes");
        Ok(written)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    async fn close(&self) {
        self.tracker.clear().await;
        self.pool.close().await;
        debug!("Database pool closed");
    }
}
