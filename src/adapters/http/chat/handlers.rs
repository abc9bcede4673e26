//! HTTP handlers for chat endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::chat::{
    CreateChatHandler, DeleteChatCommand, DeleteChatHandler, ListChatsHandler, LoadChatHandler,
    LoadChatQuery, SendMessageCommand, SendMessageHandler,
};
use crate::domain::chat::ChatError;
use crate::domain::foundation::ChatId;

use super::dto::{
    ChatListResponse, CreateChatResponse, DeleteChatResponse, ErrorResponse, SendMessageRequest,
    SendMessageResponse, TranscriptResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ChatHandlers {
    send_handler: Arc<SendMessageHandler>,
    create_handler: Arc<CreateChatHandler>,
    load_handler: Arc<LoadChatHandler>,
    delete_handler: Arc<DeleteChatHandler>,
    list_handler: Arc<ListChatsHandler>,
}

impl ChatHandlers {
    pub fn new(
        send_handler: Arc<SendMessageHandler>,
        create_handler: Arc<CreateChatHandler>,
        load_handler: Arc<LoadChatHandler>,
        delete_handler: Arc<DeleteChatHandler>,
        list_handler: Arc<ListChatsHandler>,
    ) -> Self {
        Self {
            send_handler,
            create_handler,
            load_handler,
            delete_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/chats/messages - Send a message, creating a session if needed
pub async fn send_message(
    State(handlers): State<ChatHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<SendMessageRequest>,
) -> Response {
    let chat_id = match req.chat_id.as_deref() {
        Some(raw) => match raw.parse::<ChatId>() {
            Ok(id) => Some(id),
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new("Invalid chat ID")),
                )
                    .into_response()
            }
        },
        None => None,
    };

    let cmd = SendMessageCommand {
        owner: user.id,
        message: req.message,
        chat_id,
        session_name: req.session_name,
    };

    match handlers.send_handler.handle(cmd).await {
        Ok(result) => {
            let response = SendMessageResponse {
                response: result.response_text,
                chat_id: result.chat_id.to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_chat_error(e),
    }
}

/// POST /api/chats - Create an empty session
pub async fn create_chat(
    State(handlers): State<ChatHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.create_handler.handle(&user.id).await {
        Ok(result) => {
            let response = CreateChatResponse {
                chat_id: result.chat_id.to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_chat_error(e),
    }
}

/// GET /api/chats - List the caller's sessions
pub async fn list_chats(
    State(handlers): State<ChatHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.list_handler.handle(&user.id).await {
        Ok(summaries) => {
            let response = ChatListResponse {
                chats: summaries.into_iter().map(Into::into).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_chat_error(e),
    }
}

/// GET /api/chats/:id - Load a session transcript
pub async fn load_chat(
    State(handlers): State<ChatHandlers>,
    RequireAuth(user): RequireAuth,
    Path(chat_id): Path<String>,
) -> Response {
    let chat_id = match chat_id.parse::<ChatId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Invalid chat ID")),
            )
                .into_response()
        }
    };

    let query = LoadChatQuery {
        chat_id,
        owner: user.id,
    };

    match handlers.load_handler.handle(query).await {
        Ok(transcript) => {
            let response: TranscriptResponse = transcript.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_chat_error(e),
    }
}

/// DELETE /api/chats/:id - Delete a session
pub async fn delete_chat(
    State(handlers): State<ChatHandlers>,
    RequireAuth(user): RequireAuth,
    Path(chat_id): Path<String>,
) -> Response {
    let chat_id = match chat_id.parse::<ChatId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Invalid chat ID")),
            )
                .into_response()
        }
    };

    let cmd = DeleteChatCommand {
        chat_id,
        owner: user.id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => (StatusCode::OK, Json(DeleteChatResponse { success: true })).into_response(),
        Err(e) => handle_chat_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_chat_error(error: ChatError) -> Response {
    match error {
        ChatError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Chat not found")),
        )
            .into_response(),
        ChatError::Infrastructure(msg) => {
            tracing::error!("chat operation failed: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Internal error")),
            )
                .into_response()
        }
    }
}
