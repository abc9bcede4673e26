//! Outbound backend gateways.
//!
//! One reqwest client per external service, each implementing its gateway
//! port, plus scriptable mocks for tests.

mod gemini;
mod mock;
mod newsapi;
mod openweather;

pub use gemini::{GeminiClient, GeminiConfig};
pub use mock::{MockGenerativeGateway, MockNewsGateway, MockWeatherGateway};
pub use newsapi::{NewsApiClient, NewsApiConfig};
pub use openweather::{OpenWeatherClient, OpenWeatherConfig};

use crate::ports::GatewayError;

/// Maps a reqwest failure onto the gateway error taxonomy.
pub(crate) fn transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::network(format!("request timed out: {}", err))
    } else if err.is_connect() {
        GatewayError::network(format!("connection failed: {}", err))
    } else {
        GatewayError::network(err.to_string())
    }
}

/// Rejects non-success responses, keeping the body for the log line.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(GatewayError::status(status.as_u16(), body))
}
