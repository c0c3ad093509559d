//! Repository trait for reading blog posts.

use crate::domain::entities::Blog;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for listing blog posts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::ContextBlogRepository`] - reads through a
///   [`crate::infrastructure::data_context::DataContext`]
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_blog.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Returns every persisted blog post.
    ///
    /// No filtering, paging or ordering is applied; rows come back in the
    /// backend's natural enumeration order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get_all_entries(&self) -> Result<Vec<Blog>, AppError>;
}
