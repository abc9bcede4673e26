//! External backend configuration
//!
//! One section per outbound service: the generative text model, the news
//! search API, and the weather API. Base URLs default to the public
//! endpoints and are overridable for tests and proxies.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for all outbound backends
#[derive(Debug, Clone, Deserialize)]
pub struct BackendsConfig {
    /// Generative text backend
    pub gemini: GeminiSettings,

    /// News search backend
    pub news: NewsSettings,

    /// Weather backend
    pub weather: WeatherSettings,

    /// Request timeout for all backends, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Generative text backend settings
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    /// API key (passed as the `key` query parameter)
    pub api_key: String,

    /// Model name
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// Base URL of the generative language API
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
}

/// News search backend settings
#[derive(Debug, Clone, Deserialize)]
pub struct NewsSettings {
    /// API key (passed as the `apiKey` query parameter)
    pub api_key: String,

    /// Base URL of the news API
    #[serde(default = "default_news_base_url")]
    pub base_url: String,
}

/// Weather backend settings
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherSettings {
    /// API key shared by the geocoding and weather endpoints
    pub api_key: String,

    /// Base URL of the geocoding API
    #[serde(default = "default_geocode_base_url")]
    pub geocode_base_url: String,

    /// Base URL of the weather data API
    #[serde(default = "default_weather_base_url")]
    pub weather_base_url: String,
}

impl BackendsConfig {
    /// Get the shared request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate backend configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.gemini.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("GEMINI_API_KEY"));
        }
        if self.news.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("NEWS_API_KEY"));
        }
        if self.weather.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("WEATHER_API_KEY"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash-latest".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_news_base_url() -> String {
    "https://newsapi.org/v2".to_string()
}

fn default_geocode_base_url() -> String {
    "http://api.openweathermap.org/geo/1.0".to_string()
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> BackendsConfig {
        BackendsConfig {
            gemini: GeminiSettings {
                api_key: "gm".to_string(),
                model: default_gemini_model(),
                base_url: default_gemini_base_url(),
            },
            news: NewsSettings {
                api_key: "nw".to_string(),
                base_url: default_news_base_url(),
            },
            weather: WeatherSettings {
                api_key: "wx".to_string(),
                geocode_base_url: default_geocode_base_url(),
                weather_base_url: default_weather_base_url(),
            },
            timeout_secs: default_timeout(),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn missing_key_is_rejected() {
        let mut config = base_config();
        config.news.api_key = String::new();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("NEWS_API_KEY"))
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = base_config();
        config.timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTimeout)
        ));
    }
}
