//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Blog`] - A persisted blog post
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewBlog`] describes a post that has not been assigned an id yet.

pub mod blog;

pub use blog::{Blog, NewBlog};
