//! Weather gateway over the OpenWeather geocoding and current-weather
//! endpoints.
//!
//! Both endpoints share one API key. Geocoding requests ask for a single
//! match (`limit=1`); conditions are fetched in metric units.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use crate::ports::{CurrentWeather, GatewayError, GeoMatch, WeatherGateway};

use super::{ensure_success, transport_error};

/// Configuration for the OpenWeather gateway.
#[derive(Debug, Clone)]
pub struct OpenWeatherConfig {
    /// API key passed as the `appid` query parameter.
    api_key: Secret<String>,
    /// Base URL of the geocoding API.
    pub geocode_base_url: String,
    /// Base URL of the weather data API.
    pub weather_base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenWeatherConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            geocode_base_url: "http://api.openweathermap.org/geo/1.0".to_string(),
            weather_base_url: "https://api.openweathermap.org/data/2.5".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the geocoding base URL.
    pub fn with_geocode_base_url(mut self, url: impl Into<String>) -> Self {
        self.geocode_base_url = url.into();
        self
    }

    /// Sets the weather data base URL.
    pub fn with_weather_base_url(mut self, url: impl Into<String>) -> Self {
        self.weather_base_url = url.into();
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

/// OpenWeather implementation of [`WeatherGateway`].
pub struct OpenWeatherClient {
    config: OpenWeatherConfig,
    client: Client,
}

impl OpenWeatherClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: OpenWeatherConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn geocode_url(&self) -> String {
        format!("{}/direct", self.config.geocode_base_url)
    }

    fn weather_url(&self) -> String {
        format!("{}/weather", self.config.weather_base_url)
    }
}

#[async_trait]
impl WeatherGateway for OpenWeatherClient {
    async fn geocode(&self, location: &str) -> Result<Vec<GeoMatch>, GatewayError> {
        let response = self
            .client
            .get(self.geocode_url())
            .query(&[("q", location), ("limit", "1"), ("appid", self.config.api_key())])
            .send()
            .await
            .map_err(transport_error)?;

        let response = ensure_success(response).await?;

        let payload: Vec<GeoMatchDto> = response
            .json()
            .await
            .map_err(|e| GatewayError::parse(format!("Failed to parse response: {}", e)))?;

        Ok(payload.into_iter().map(GeoMatch::from).collect())
    }

    async fn current_weather(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<CurrentWeather, GatewayError> {
        let lat = lat.to_string();
        let lon = lon.to_string();
        let response = self
            .client
            .get(self.weather_url())
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("appid", self.config.api_key()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let response = ensure_success(response).await?;

        let payload: CurrentWeatherDto = response
            .json()
            .await
            .map_err(|e| GatewayError::parse(format!("Failed to parse response: {}", e)))?;

        Ok(payload.into())
    }
}

// ----- Wire types -----

#[derive(Debug, Deserialize)]
struct GeoMatchDto {
    lat: f64,
    lon: f64,
    #[serde(default)]
    name: String,
}

impl From<GeoMatchDto> for GeoMatch {
    fn from(dto: GeoMatchDto) -> Self {
        GeoMatch {
            lat: dto.lat,
            lon: dto.lon,
            name: dto.name,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherDto {
    #[serde(default)]
    weather: Vec<ConditionDto>,
    main: MainDto,
}

#[derive(Debug, Deserialize)]
struct ConditionDto {
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainDto {
    temp: f64,
}

impl From<CurrentWeatherDto> for CurrentWeather {
    fn from(dto: CurrentWeatherDto) -> Self {
        CurrentWeather {
            conditions: dto.weather.into_iter().map(|c| c.description).collect(),
            temperature: dto.main.temp,
        }
    }
}
