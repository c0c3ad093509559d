//! Handler for the blog listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::blog::BlogItem;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every blog post.
///
/// # Endpoint
///
/// `GET /api/blog`
///
/// # Response
///
/// **200 OK** with a JSON array, empty when no posts exist:
///
/// ```json
/// [
///   { "id": 1, "title": "Hello", "content": null }
/// ]
/// ```
///
/// # Errors
///
/// Storage failures are returned as 500 with the standard error body.
pub async fn blog_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogItem>>, AppError> {
    let entries = state.blog_repository.get_all_entries().await?;

    tracing::debug!(count = entries.len(), "Listed blog entries");

    Ok(Json(entries.into_iter().map(BlogItem::from).collect()))
}
