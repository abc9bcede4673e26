//! HTTP routes for chat endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_chat, delete_chat, list_chats, load_chat, send_message, ChatHandlers,
};

/// Creates the chat router with all endpoints.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/", post(create_chat).get(list_chats))
        .route("/messages", post(send_message))
        .route("/:id", get(load_chat).delete(delete_chat))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::adapters::backends::{
        MockGenerativeGateway, MockNewsGateway, MockWeatherGateway,
    };
    use crate::adapters::memory::InMemoryChatRepository;
    use crate::application::handlers::chat::{
        CreateChatHandler, DeleteChatHandler, ListChatsHandler, LoadChatHandler,
        SendMessageHandler,
    };
    use crate::application::responders::{GeneralResponder, NewsResponder, WeatherResponder};

    #[test]
    fn chat_routes_builds() {
        let repository = Arc::new(InMemoryChatRepository::new());
        let handlers = ChatHandlers::new(
            Arc::new(SendMessageHandler::new(
                repository.clone(),
                Arc::new(GeneralResponder::new(Arc::new(
                    MockGenerativeGateway::with_reply("ok"),
                ))),
                Arc::new(NewsResponder::new(Arc::new(MockNewsGateway::empty()))),
                Arc::new(WeatherResponder::new(Arc::new(
                    MockWeatherGateway::unresolvable(),
                ))),
            )),
            Arc::new(CreateChatHandler::new(repository.clone())),
            Arc::new(LoadChatHandler::new(repository.clone())),
            Arc::new(DeleteChatHandler::new(repository.clone())),
            Arc::new(ListChatsHandler::new(repository)),
        );
        let _router = chat_routes(handlers);
    }
}
