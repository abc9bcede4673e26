//! Weather response adapter - geocode, fetch conditions, compose the
//! report sentence.

use std::sync::Arc;

use crate::ports::{GatewayError, WeatherGateway};

/// Apology shown when the weather backend cannot be reached.
pub const WEATHER_FALLBACK: &str = "Sorry, something went wrong with the weather service.";

/// Resolves a location and reports its current conditions.
pub struct WeatherResponder {
    gateway: Arc<dyn WeatherGateway>,
}

impl WeatherResponder {
    pub fn new(gateway: Arc<dyn WeatherGateway>) -> Self {
        Self { gateway }
    }

    /// Produces the display reply for an extracted location. Never fails.
    pub async fn respond(&self, location: &str) -> String {
        match self.report(location).await {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(error = %err, backend = "weather", "backend request failed");
                WEATHER_FALLBACK.to_string()
            }
        }
    }

    /// The two-call sequence: geocode first, then current conditions at the
    /// first match.
    async fn report(&self, location: &str) -> Result<String, GatewayError> {
        let matches = self.gateway.geocode(location).await?;

        let Some(place) = matches.into_iter().next() else {
            return Ok(format!("No geolocation data found for: {}.", location));
        };

        let weather = self.gateway.current_weather(place.lat, place.lon).await?;

        match weather.conditions.first() {
            Some(description) => Ok(format!(
                "The current weather in {} is {} with a temperature of {}°C.",
                place.name,
                capitalize(description),
                format_celsius(weather.temperature)
            )),
            None => Ok(format!(
                "No weather information found for your query: {}.",
                location
            )),
        }
    }
}

/// First character uppercased, the rest lowercased.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Celsius rendering; integral values keep one decimal place.
fn format_celsius(temperature: f64) -> String {
    if temperature.fract() == 0.0 {
        format!("{:.1}", temperature)
    } else {
        temperature.to_string()
    }
}
