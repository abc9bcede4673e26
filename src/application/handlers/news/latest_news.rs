//! LatestNewsHandler - run the news adapter outside a session.

use std::sync::Arc;

use crate::application::responders::NewsResponder;

/// Query used when the caller does not provide one.
const DEFAULT_QUERY: &str = "latest news";

/// Handler for the direct news lookup endpoint.
///
/// Nothing is recorded; the adapter's formatted text (or apology) is
/// returned as-is.
pub struct LatestNewsHandler {
    news: Arc<NewsResponder>,
}

impl LatestNewsHandler {
    pub fn new(news: Arc<NewsResponder>) -> Self {
        Self { news }
    }

    pub async fn handle(&self, query: Option<&str>) -> String {
        let query = match query {
            Some(query) if !query.is_empty() => query,
            _ => DEFAULT_QUERY,
        };
        self.news.respond(query).await
    }
}
