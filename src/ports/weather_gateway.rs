//! Weather lookup gateway port.

use async_trait::async_trait;

use super::GatewayError;

/// A geocoding match for a place name.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoMatch {
    pub lat: f64,
    pub lon: f64,
    /// Resolved city name, as the backend spells it.
    pub name: String,
}

/// Current conditions at a coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    /// Condition descriptions; may be empty when the backend omits them.
    pub conditions: Vec<String>,
    /// Temperature in Celsius.
    pub temperature: f64,
}

/// Port for the weather backend (geocode, then conditions).
#[async_trait]
pub trait WeatherGateway: Send + Sync {
    /// Resolves a place name to coordinate matches, best first.
    async fn geocode(&self, location: &str) -> Result<Vec<GeoMatch>, GatewayError>;

    /// Fetches current conditions at a coordinate, in metric units.
    async fn current_weather(&self, lat: f64, lon: f64)
        -> Result<CurrentWeather, GatewayError>;
}
