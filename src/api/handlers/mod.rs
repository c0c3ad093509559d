//! HTTP request handlers for API endpoints.

pub mod blog;
pub mod health;

pub use blog::blog_list_handler;
pub use health::health_handler;
