//! News search gateway over the NewsAPI `everything` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use crate::ports::{Article, GatewayError, NewsGateway};

use super::{ensure_success, transport_error};

/// Configuration for the NewsAPI gateway.
#[derive(Debug, Clone)]
pub struct NewsApiConfig {
    /// API key passed as the `apiKey` query parameter.
    api_key: Secret<String>,
    /// Base URL of the news API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl NewsApiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://newsapi.org/v2".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// NewsAPI implementation of [`NewsGateway`].
pub struct NewsApiClient {
    config: NewsApiConfig,
    client: Client,
}

impl NewsApiClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: NewsApiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn search_url(&self) -> String {
        format!("{}/everything", self.config.base_url)
    }
}

#[async_trait]
impl NewsGateway for NewsApiClient {
    async fn search(&self, query: &str) -> Result<Vec<Article>, GatewayError> {
        tracing::debug!(query, "searching news articles");

        let response = self
            .client
            .get(self.search_url())
            .query(&[
                ("q", query),
                ("sortBy", "popularity"),
                ("apiKey", self.config.api_key()),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let response = ensure_success(response).await?;

        let payload: SearchResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::parse(format!("Failed to parse response: {}", e)))?;

        Ok(payload.articles.into_iter().map(Article::from).collect())
    }
}

// ----- Wire types -----

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<ArticleDto>,
}

#[derive(Debug, Deserialize)]
struct ArticleDto {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

impl From<ArticleDto> for Article {
    fn from(dto: ArticleDto) -> Self {
        Article {
            title: dto.title.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
            url: dto.url.unwrap_or_default(),
        }
    }
}
