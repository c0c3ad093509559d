//! API route configuration.

use crate::api::handlers::blog_list_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Blog resource routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET /blog` - List every blog post
pub fn blog_routes() -> Router<AppState> {
    Router::new().route("/blog", get(blog_list_handler))
}
