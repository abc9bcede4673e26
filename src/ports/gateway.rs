//! Shared error type for outbound backend gateways.

use thiserror::Error;

/// Transport or protocol failure while talking to an external backend.
///
/// Gateways surface these to the response adapters, which absorb them into
/// fallback reply text; they never reach the session manager.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Connection, DNS, or timeout failure.
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status from the backend.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}

impl GatewayError {
    pub fn network(message: impl Into<String>) -> Self {
        GatewayError::Network(message.into())
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        GatewayError::Status {
            status,
            body: body.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        GatewayError::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_code_and_body() {
        let err = GatewayError::status(503, "unavailable");
        assert_eq!(err.to_string(), "unexpected status 503: unavailable");
    }
}
