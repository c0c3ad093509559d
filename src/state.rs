//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::domain::repositories::BlogRepository;
use crate::infrastructure::data_context::DataContext;

#[derive(Clone)]
pub struct AppState {
    /// Source of blog entries for the list endpoint.
    pub blog_repository: Arc<dyn BlogRepository>,
    /// Storage handle, used by the health check.
    pub storage: Arc<dyn DataContext>,
}

impl AppState {
    pub fn new(blog_repository: Arc<dyn BlogRepository>, storage: Arc<dyn DataContext>) -> Self {
        Self {
            blog_repository,
            storage,
        }
    }
}
