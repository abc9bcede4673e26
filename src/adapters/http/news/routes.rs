//! HTTP routes for the news endpoint.

use axum::{routing::get, Router};

use super::handlers::{latest_news, NewsHandlers};

/// Creates the news router.
pub fn news_routes(handlers: NewsHandlers) -> Router {
    Router::new()
        .route("/", get(latest_news))
        .with_state(handlers)
}
