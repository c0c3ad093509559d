//! Domain entity representing a blog post.

/// A persisted blog post.
///
/// The `id` is generated by the storage backend when the row is first saved
/// and uniquely identifies the row afterwards. Descriptive fields are optional,
/// so an empty post is a valid row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Blog {
    /// Creates a new Blog instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let blog = Blog::new(1, Some("Hello".to_string()), None);
    /// ```
    pub fn new(id: i64, title: Option<String>, content: Option<String>) -> Self {
        Self { id, title, content }
    }
}

/// Input data for a blog post that has not been persisted yet.
///
/// Starts empty (`NewBlog::default()`) and is populated by the caller before
/// being added to a data context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBlog {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NewBlog {
    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Turns the pending post into a persisted one with the given id.
    pub fn into_blog(self, id: i64) -> Blog {
        Blog::new(id, self.title, self.content)
    }
}
