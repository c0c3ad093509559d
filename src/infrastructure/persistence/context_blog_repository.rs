//! Blog repository reading through a data context.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::Blog;
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;
use crate::infrastructure::data_context::DataContext;

/// Repository backed by any [`DataContext`] (PostgreSQL or in-memory).
pub struct ContextBlogRepository {
    context: Arc<dyn DataContext>,
}

impl ContextBlogRepository {
    /// Creates a repository over the given context.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidArgument`] if `context` is `None`. The check
    /// happens here, not on first use.
    pub fn new(context: Option<Arc<dyn DataContext>>) -> Result<Self, AppError> {
        let context = context.ok_or_else(|| {
            AppError::invalid_argument(
                "Data context is required",
                json!({"argument": "context"}),
            )
        })?;

        Ok(Self { context })
    }
}

#[async_trait]
impl BlogRepository for ContextBlogRepository {
    async fn get_all_entries(&self) -> Result<Vec<Blog>, AppError> {
        self.context.blogs().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewBlog;
    use crate::infrastructure::data_context::{DataContextOptions, open_data_context};

    /// Context whose row set is fixed at construction.
    struct FixedContext {
        rows: Vec<Blog>,
    }

    #[async_trait]
    impl DataContext for FixedContext {
        async fn blogs(&self) -> Result<Vec<Blog>, AppError> {
            Ok(self.rows.clone())
        }
        async fn add(&self, _blog: NewBlog) {}
        async fn update(&self, _blog: Blog) {}
        async fn remove(&self, _id: i64) {}
        async fn pending_changes(&self) -> usize {
            0
        }
        async fn save_changes(&self) -> Result<usize, AppError> {
            Ok(0)
        }
        async fn health_check(&self) -> bool {
            true
        }
        async fn close(&self) {}
    }

    /// Context that fails every read.
    struct BrokenContext;

    #[async_trait]
    impl DataContext for BrokenContext {
        async fn blogs(&self) -> Result<Vec<Blog>, AppError> {
            Err(sqlx::Error::PoolTimedOut.into())
        }
        async fn add(&self, _blog: NewBlog) {}
        async fn update(&self, _blog: Blog) {}
        async fn remove(&self, _id: i64) {}
        async fn pending_changes(&self) -> usize {
            0
        }
        async fn save_changes(&self) -> Result<usize, AppError> {
            Err(sqlx::Error::PoolTimedOut.into())
        }
        async fn health_check(&self) -> bool {
            false
        }
        async fn close(&self) {}
    }

    #[test]
    fn test_missing_context_is_rejected() {
        let result = ContextBlogRepository::new(None);

        assert!(matches!(result, Err(AppError::InvalidArgument { .. })));
    }

    #[tokio::test]
    async fn test_returns_all_rows_of_fake_context() {
        let context: Arc<dyn DataContext> = Arc::new(FixedContext {
            rows: vec![Blog::new(1, None, None), Blog::new(2, None, None)],
        });
        let repo = ContextBlogRepository::new(Some(context)).unwrap();

        let entries = repo.get_all_entries().await.unwrap();

        assert_eq!(entries.len(), 2);
    }

    #[tokio::test]
    async fn test_backend_errors_propagate() {
        let context: Arc<dyn DataContext> = Arc::new(BrokenContext);
        let repo = ContextBlogRepository::new(Some(context)).unwrap();

        let result = repo.get_all_entries().await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_reads_do_not_touch_pending_changes() {
        let context = open_data_context(DataContextOptions::in_memory_unique())
            .await
            .unwrap();
        let repo = ContextBlogRepository::new(Some(context.clone())).unwrap();

        context.add(NewBlog::default()).await;
        repo.get_all_entries().await.unwrap();

        assert_eq!(context.pending_changes().await, 1);
    }
}
