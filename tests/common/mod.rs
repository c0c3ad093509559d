#![allow(dead_code)]

use async_trait::async_trait;
use blog_api::domain::entities::{Blog, NewBlog};
use blog_api::domain::repositories::BlogRepository;
use blog_api::error::AppError;
use blog_api::infrastructure::data_context::{DataContext, DataContextOptions, open_data_context};
use blog_api::infrastructure::persistence::ContextBlogRepository;
use blog_api::state::AppState;
use std::sync::Arc;

/// Repository double returning a fixed list.
pub struct StubBlogRepository {
    pub entries: Vec<Blog>,
}

#[async_trait]
impl BlogRepository for StubBlogRepository {
    async fn get_all_entries(&self) -> Result<Vec<Blog>, AppError> {
        Ok(self.entries.clone())
    }
}

/// Opens a context on a fresh, uniquely named in-memory store.
pub async fn create_memory_context() -> Arc<dyn DataContext> {
    open_data_context(DataContextOptions::in_memory_unique())
        .await
        .unwrap()
}

pub async fn seed_blogs(context: &Arc<dyn DataContext>, count: usize) {
    for i in 0..count {
        context
            .add(NewBlog::default().with_title(format!("Post {}", i + 1)))
            .await;
    }
    context.save_changes().await.unwrap();
}

/// State wired the way the server wires it: repository over the given context.
pub fn create_test_state(context: Arc<dyn DataContext>) -> AppState {
    let repository = ContextBlogRepository::new(Some(context.clone())).unwrap();
    AppState::new(Arc::new(repository), context)
}

/// State whose repository is the stub, with an unrelated in-memory store for health.
pub async fn create_stub_state(entries: Vec<Blog>) -> AppState {
    let storage = create_memory_context().await;
    AppState::new(Arc::new(StubBlogRepository { entries }), storage)
}
