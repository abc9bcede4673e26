//! HTTP DTOs for the news endpoint.

use serde::{Deserialize, Serialize};

/// Query parameters for the news lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsQuery {
    #[serde(default)]
    pub query: Option<String>,
}

/// Formatted news text.
#[derive(Debug, Clone, Serialize)]
pub struct NewsResponse {
    pub news: String,
}
