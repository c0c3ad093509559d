//! In-memory data context keyed by store name.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use super::{ChangeTracker, DataContext, PendingChange};
use crate::domain::entities::{Blog, NewBlog};
use crate::error::AppError;

/// Rows of one named store plus its id sequence.
#[derive(Debug, Clone, Default)]
struct MemoryTable {
    rows: Vec<Blog>,
    last_id: i64,
}

impl MemoryTable {
    fn apply(&mut self, change: PendingChange) -> Result<(), AppError> {
        match change {
            PendingChange::Added(new_blog) => {
                self.last_id += 1;
                self.rows.push(new_blog.into_blog(self.last_id));
            }
            PendingChange::Modified(blog) => {
                let id = blog.id;
                let row = self
                    .rows
                    .iter_mut()
                    .find(|row| row.id == id)
                    .ok_or_else(|| AppError::not_found("Blog not found", json!({"id": id})))?;
                *row = blog;
            }
            PendingChange::Removed(id) => {
                let pos = self
                    .rows
                    .iter()
                    .position(|row| row.id == id)
                    .ok_or_else(|| AppError::not_found("Blog not found", json!({"id": id})))?;
                self.rows.remove(pos);
            }
        }
        Ok(())
    }
}

type SharedTable = Arc<RwLock<MemoryTable>>;

/// Named stores live for the whole process, like a shared in-memory database.
static STORES: LazyLock<Mutex<HashMap<String, SharedTable>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Data context backed by a process-local store.
///
/// Contexts opened with the same name see the same rows; rows survive the
/// context that wrote them. Use distinct names (see
/// [`super::DataContextOptions::in_memory_unique`]) to isolate tests.
pub struct InMemoryDataContext {
    name: String,
    table: SharedTable,
    tracker: ChangeTracker,
}

impl InMemoryDataContext {
    /// Opens the store called `name`, creating it on first use.
    pub async fn open(name: &str) -> Self {
        let table = {
            let mut stores = STORES.lock().await;
            stores
                .entry(name.to_string())
                .or_insert_with(|| {
                    debug!(store = name, "Creating in-memory store");
                    Arc::new(RwLock::new(MemoryTable::default()))
                })
                .clone()
        };

        Self {
            name: name.to_string(),
            table,
            tracker: ChangeTracker::new(),
        }
    }

    /// Name of the underlying store.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[async_trait]
impl DataContext for InMemoryDataContext {
    async fn blogs(&self) -> Result<Vec<Blog>, AppError> {
        Ok(self.table.read().await.rows.clone())
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

        let mut table = self.table.write().await;

        // Apply to a copy so a failing change leaves the store untouched.
        let mut staged = table.clone();
        for change in pending.iter().cloned() {
            staged.apply(change)?;
        }

        let written = pending.len();
        *table = staged;
        pending.clear();

        debug!(store = %self.name, rows = written, "Saved changes");
        Ok(written)
    }

    async fn health_check(&self) -> bool {
        true
    }

    async fn close(&self) {
        self.tracker.clear().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::data_context::DataContextOptions;
    use crate::infrastructure::data_context::StorageBackend;

    fn unique_name() -> String {
        match DataContextOptions::in_memory_unique().backend {
            StorageBackend::InMemory { name } => name,
            StorageBackend::Postgres(_) => unreachable!(),
        }
    }

    #[tokio::test]
    async fn test_pending_changes_invisible_until_saved() {
        let context = InMemoryDataContext::open(&unique_name()).await;

        context.add(NewBlog::default()).await;

        assert_eq!(context.pending_changes().await, 1);
        assert!(context.blogs().await.unwrap().is_empty());

        let written = context.save_changes().await.unwrap();

        assert_eq!(written, 1);
        assert_eq!(context.pending_changes().await, 0);
        assert_eq!(context.blogs().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_ids_are_generated_in_sequence() {
        let context = InMemoryDataContext::open(&unique_name()).await;

        context.add(NewBlog::default().with_title("one")).await;
        context.add(NewBlog::default().with_title("two")).await;
        context.save_changes().await.unwrap();

        let blogs = context.blogs().await.unwrap();
        assert_eq!(blogs[0].id, 1);
        assert_eq!(blogs[1].id, 2);
        assert_eq!(blogs[1].title.as_deref(), Some("two"));
    }

    #[tokio::test]
    async fn test_same_name_shares_rows() {
        let name = unique_name();
        let writer = InMemoryDataContext::open(&name).await;
        writer.add(NewBlog::default()).await;
        writer.save_changes().await.unwrap();
        drop(writer);

        let reader = InMemoryDataContext::open(&name).await;
        assert_eq!(reader.blogs().await.unwrap().len(), 1);

        let other = InMemoryDataContext::open(&unique_name()).await;
        assert!(other.blogs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_remove() {
        let context = InMemoryDataContext::open(&unique_name()).await;
        context.add(NewBlog::default().with_title("old")).await;
        context.add(NewBlog::default()).await;
        context.save_changes().await.unwrap();

        context
            .update(Blog::new(1, Some("new".to_string()), None))
            .await;
        context.remove(2).await;
        assert_eq!(context.save_changes().await.unwrap(), 2);

        let blogs = context.blogs().await.unwrap();
        assert_eq!(blogs.len(), 1);
        assert_eq!(blogs[0].title.as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_failed_save_commits_nothing() {
        let context = InMemoryDataContext::open(&unique_name()).await;

        context.add(NewBlog::default()).await;
        context.remove(99).await;

        let result = context.save_changes().await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
        assert!(context.blogs().await.unwrap().is_empty());
        assert_eq!(context.pending_changes().await, 2);
    }

    #[tokio::test]
    async fn test_save_without_changes() {
        let context = InMemoryDataContext::open(&unique_name()).await;

        assert_eq!(context.save_changes().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_close_discards_pending_changes() {
        let context = InMemoryDataContext::open(&unique_name()).await;
        context.add(NewBlog::default()).await;

        context.close().await;

        assert_eq!(context.pending_changes().await, 0);
        assert_eq!(context.save_changes().await.unwrap(), 0);
        assert!(context.blogs().await.unwrap().is_empty());
    }
}
