//! News response adapter - keyword derivation and article formatting.

use std::sync::Arc;

use crate::ports::{Article, NewsGateway};

/// Apology shown when the news backend cannot be reached.
pub const NEWS_FALLBACK: &str = "Sorry, something went wrong with the news service.";

/// Tokens dropped from the message when deriving the search query.
const STOPWORDS: &[&str] = &["news", "about", "this", "the", "and", "or"];

/// Derives the search query: non-stopword tokens, order preserved,
/// rejoined with single spaces. Stopword comparison is case-insensitive.
pub fn derive_keywords(message: &str) -> String {
    message
        .split_whitespace()
        .filter(|word| !STOPWORDS.contains(&word.to_lowercase().as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Searches the news backend and formats the results as article blocks.
pub struct NewsResponder {
    gateway: Arc<dyn NewsGateway>,
}

impl NewsResponder {
    pub fn new(gateway: Arc<dyn NewsGateway>) -> Self {
        Self { gateway }
    }

    /// Produces the display reply for a news-intent message. Never fails.
    pub async fn respond(&self, message: &str) -> String {
        let keywords = derive_keywords(message);

        match self.gateway.search(&keywords).await {
            Ok(articles) if articles.is_empty() => {
                format!("No news articles found for your query: {}.", keywords)
            }
            Ok(articles) => articles.iter().map(format_article).collect(),
            Err(err) => {
                tracing::error!(error = %err, backend = "news", "backend request failed");
                NEWS_FALLBACK.to_string()
            }
        }
    }
}

fn format_article(article: &Article) -> String {
    format!(
        "<b>{}</b><br>{}<br><a href='{}'>Read more</a><br><br>",
        article.title, article.description, article.url
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::backends::MockNewsGateway;

    fn article(title: &str, description: &str, url: &str) -> Article {
        Article {
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn keywords_drop_stopwords_preserving_order() {
        assert_eq!(
            derive_keywords("Give me news about elections"),
            "Give me elections"
        );
    }

    #[test]
    fn stopword_matching_is_case_insensitive() {
        assert_eq!(derive_keywords("News ABOUT The markets"), "markets");
    }

    #[test]
    fn message_of_only_stopwords_derives_empty_query() {
        assert_eq!(derive_keywords("news about the and or"), "");
    }

    #[tokio::test]
    async fn searches_with_derived_keywords() {
        let gateway = Arc::new(MockNewsGateway::empty());
        let responder = NewsResponder::new(gateway.clone());

        responder.respond("Give me news about elections").await;
        assert_eq!(gateway.queries(), vec!["Give me elections".to_string()]);
    }

    #[tokio::test]
    async fn formats_articles_in_result_order() {
        let gateway = Arc::new(MockNewsGateway::with_articles(vec![
            article("First", "one", "https://a"),
            article("Second", "two", "https://b"),
        ]));
        let responder = NewsResponder::new(gateway);

        let reply = responder.respond("election news").await;
        assert_eq!(
            reply,
            "<b>First</b><br>one<br><a href='https://a'>Read more</a><br><br>\
             <b>Second</b><br>two<br><a href='https://b'>Read more</a><br><br>"
        );
    }

    #[tokio::test]
    async fn zero_articles_names_the_derived_query() {
        let gateway = Arc::new(MockNewsGateway::empty());
        let responder = NewsResponder::new(gateway);

        let reply = responder.respond("news about unicorn startups").await;
        assert_eq!(
            reply,
            "No news articles found for your query: unicorn startups."
        );
    }

    #[tokio::test]
    async fn transport_failure_yields_news_apology() {
        let gateway = Arc::new(MockNewsGateway::failing());
        let responder = NewsResponder::new(gateway);

        let reply = responder.respond("any news?").await;
        assert_eq!(reply, NEWS_FALLBACK);
    }
}
