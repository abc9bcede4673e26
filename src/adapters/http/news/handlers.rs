//! HTTP handlers for the news endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::news::LatestNewsHandler;

use super::dto::{NewsQuery, NewsResponse};

#[derive(Clone)]
pub struct NewsHandlers {
    latest_handler: Arc<LatestNewsHandler>,
}

impl NewsHandlers {
    pub fn new(latest_handler: Arc<LatestNewsHandler>) -> Self {
        Self { latest_handler }
    }
}

/// GET /api/news - Fetch formatted news for a query
pub async fn latest_news(
    State(handlers): State<NewsHandlers>,
    RequireAuth(_user): RequireAuth,
    Query(params): Query<NewsQuery>,
) -> Response {
    let news = handlers
        .latest_handler
        .handle(params.query.as_deref())
        .await;
    (StatusCode::OK, Json(NewsResponse { news })).into_response()
}
