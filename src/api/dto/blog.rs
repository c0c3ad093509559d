//! DTOs for blog listing.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Blog;

/// A blog post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogItem {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl From<Blog> for BlogItem {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            content: blog.content,
        }
    }
}
