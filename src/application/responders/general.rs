//! General response adapter - generative text with display markup.

use std::sync::Arc;

use crate::domain::chat::render_reply;
use crate::ports::GenerativeGateway;

/// Apology shown when the generative backend cannot be reached.
pub const CHAT_FALLBACK: &str = "Sorry, something went wrong with the chat service.";

/// Sends the raw message as a single prompt and renders the reply markup.
pub struct GeneralResponder {
    gateway: Arc<dyn GenerativeGateway>,
}

impl GeneralResponder {
    pub fn new(gateway: Arc<dyn GenerativeGateway>) -> Self {
        Self { gateway }
    }

    /// Produces the display reply for a message. Never fails.
    pub async fn respond(&self, message: &str) -> String {
        match self.gateway.generate(message).await {
            Ok(text) => render_reply(&text),
            Err(err) => {
                tracing::error!(error = %err, backend = "chat", "backend request failed");
                CHAT_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::backends::MockGenerativeGateway;

    #[tokio::test]
    async fn renders_markup_in_reply() {
        let gateway = Arc::new(MockGenerativeGateway::with_reply("**Bold** line\nnext"));
        let responder = GeneralResponder::new(gateway);

        let reply = responder.respond("hello").await;
        assert_eq!(reply, "<b>Bold</b> line<br>next");
    }

    #[tokio::test]
    async fn passes_raw_message_as_prompt() {
        let gateway = Arc::new(MockGenerativeGateway::with_reply("ok"));
        let responder = GeneralResponder::new(gateway.clone());

        responder.respond("what is rust?").await;
        assert_eq!(gateway.prompts(), vec!["what is rust?".to_string()]);
    }

    #[tokio::test]
    async fn transport_failure_yields_chat_apology() {
        let gateway = Arc::new(MockGenerativeGateway::failing());
        let responder = GeneralResponder::new(gateway);

        let reply = responder.respond("hello").await;
        assert_eq!(reply, CHAT_FALLBACK);
    }
}
