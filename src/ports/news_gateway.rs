//! News search gateway port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::GatewayError;

/// One article returned by the news backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub url: String,
}

/// Port for the news search backend.
#[async_trait]
pub trait NewsGateway: Send + Sync {
    /// Searches articles for the query, sorted by popularity, in result
    /// order.
    async fn search(&self, query: &str) -> Result<Vec<Article>, GatewayError>;
}
