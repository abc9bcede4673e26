//! Generative text gateway port.

use async_trait::async_trait;

use super::GatewayError;

/// Port for the general-purpose language model backend.
///
/// Implementations send a single prompt and return the model's raw text.
/// A structurally valid response that lacks the text field degrades to a
/// placeholder string at the implementation level rather than erroring.
#[async_trait]
pub trait GenerativeGateway: Send + Sync {
    /// Generates a reply for the prompt.
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generative_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn GenerativeGateway) {}
    }
}
