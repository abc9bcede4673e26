//! Scriptable mock gateways.
//!
//! Used by responder and session-manager tests to script backend replies
//! and inject transport failures without network access.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::ports::{
    Article, CurrentWeather, GatewayError, GenerativeGateway, GeoMatch, NewsGateway,
    WeatherGateway,
};

fn simulated_failure() -> GatewayError {
    GatewayError::network("simulated transport failure")
}

/// Mock generative backend returning a fixed reply.
pub struct MockGenerativeGateway {
    reply: String,
    fail: bool,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerativeGateway {
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            fail: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: String::new(),
            fail: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeGateway for MockGenerativeGateway {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail {
            return Err(simulated_failure());
        }
        Ok(self.reply.clone())
    }
}

/// Mock news backend returning a fixed article list.
pub struct MockNewsGateway {
    articles: Vec<Article>,
    fail: bool,
    queries: Mutex<Vec<String>>,
}

impl MockNewsGateway {
    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles,
            fail: false,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::with_articles(Vec::new())
    }

    pub fn failing() -> Self {
        Self {
            articles: Vec::new(),
            fail: true,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Queries received so far.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl NewsGateway for MockNewsGateway {
    async fn search(&self, query: &str) -> Result<Vec<Article>, GatewayError> {
        self.queries.lock().unwrap().push(query.to_string());
        if self.fail {
            return Err(simulated_failure());
        }
        Ok(self.articles.clone())
    }
}

/// Mock weather backend with scriptable geocode and conditions results.
pub struct MockWeatherGateway {
    matches: Vec<GeoMatch>,
    weather: Option<CurrentWeather>,
    fail_geocode: bool,
    fail_weather: bool,
}

impl MockWeatherGateway {
    pub fn with_weather(matches: Vec<GeoMatch>, weather: CurrentWeather) -> Self {
        Self {
            matches,
            weather: Some(weather),
            fail_geocode: false,
            fail_weather: false,
        }
    }

    /// Geocoding resolves nothing.
    pub fn unresolvable() -> Self {
        Self {
            matches: Vec::new(),
            weather: None,
            fail_geocode: false,
            fail_weather: false,
        }
    }

    pub fn failing_geocode() -> Self {
        Self {
            matches: Vec::new(),
            weather: None,
            fail_geocode: true,
            fail_weather: false,
        }
    }

    pub fn failing_weather(matches: Vec<GeoMatch>) -> Self {
        Self {
            matches,
            weather: None,
            fail_geocode: false,
            fail_weather: true,
        }
    }
}

#[async_trait]
impl WeatherGateway for MockWeatherGateway {
    async fn geocode(&self, _location: &str) -> Result<Vec<GeoMatch>, GatewayError> {
        if self.fail_geocode {
            return Err(simulated_failure());
        }
        Ok(self.matches.clone())
    }

    async fn current_weather(
        &self,
        _lat: f64,
        _lon: f64,
    ) -> Result<CurrentWeather, GatewayError> {
        if self.fail_weather {
            return Err(simulated_failure());
        }
        self.weather.clone().ok_or_else(simulated_failure)
    }
}
