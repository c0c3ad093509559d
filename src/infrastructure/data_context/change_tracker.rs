//! Pending-change bookkeeping shared by every data context adapter.

use tokio::sync::{Mutex, MutexGuard};

use crate::domain::entities::{Blog, NewBlog};

/// A change staged on a context but not yet written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingChange {
    Added(NewBlog),
    Modified(Blog),
    Removed(i64),
}

/// Ordered list of staged changes.
///
/// Adapters hold the guard for the whole save so a concurrent `add` cannot
/// slip in between applying the batch and clearing it.
#[derive(Debug, Default)]
pub struct ChangeTracker {
    pending: Mutex<Vec<PendingChange>>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn track(&self, change: PendingChange) {
        self.pending.lock().await.push(change);
    }

    pub async fn len(&self) -> usize {
        self.pending.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pending.lock().await.is_empty()
    }

    /// Locks the pending list for a save.
    ///
    /// Callers clear the list only after the batch is committed.
    pub async fn lock(&self) -> MutexGuard<'_, Vec<PendingChange>> {
        self.pending.lock().await
    }

    pub async fn clear(&self) {
        self.pending.lock().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_track_keeps_order() {
        let tracker = ChangeTracker::new();

        tracker
            .track(PendingChange::Added(NewBlog::default().with_title("a")))
            .await;
        tracker.track(PendingChange::Removed(3)).await;

        let pending = tracker.lock().await;
        assert_eq!(pending.len(), 2);
        assert!(matches!(pending[0], PendingChange::Added(_)));
        assert_eq!(pending[1], PendingChange::Removed(3));
    }

    #[tokio::test]
    async fn test_clear() {
        let tracker = ChangeTracker::new();
        tracker.track(PendingChange::Removed(1)).await;

        assert_eq!(tracker.len().await, 1);
        tracker.clear().await;
        assert!(tracker.is_empty().await);
    }
}
