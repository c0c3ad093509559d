//! Repository implementations.
//!
//! # Repositories
//!
//! - [`ContextBlogRepository`] - Blog reads through a
//!   [`crate::infrastructure::data_context::DataContext`]

pub mod context_blog_repository;

pub use context_blog_repository::ContextBlogRepository;
