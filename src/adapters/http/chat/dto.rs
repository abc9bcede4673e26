//! HTTP DTOs for chat endpoints.
//!
//! Wire names (`response`, `chat_id`, `messages`, `session_name`,
//! `success`) are part of the external contract and decoupled from the
//! domain types.

use serde::{Deserialize, Serialize};

use crate::application::handlers::chat::{ChatSummary, ChatTranscript};
use crate::domain::chat::{Speaker, TranscriptEntry};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to send one message.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
    #[serde(default)]
    pub chat_id: Option<String>,
    #[serde(default)]
    pub session_name: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a recorded turn.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageResponse {
    pub response: String,
    pub chat_id: String,
}

/// Response for explicit session creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateChatResponse {
    pub chat_id: String,
}

/// One display line of a transcript.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntryResponse {
    pub id: usize,
    pub sender: &'static str,
    pub text: String,
}

impl From<TranscriptEntry> for TranscriptEntryResponse {
    fn from(entry: TranscriptEntry) -> Self {
        Self {
            id: entry.id,
            sender: match entry.sender {
                Speaker::User => "user",
                Speaker::Bot => "bot",
            },
            text: entry.text,
        }
    }
}

/// Full decoded conversation.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptResponse {
    pub messages: Vec<TranscriptEntryResponse>,
    pub session_name: String,
}

impl From<ChatTranscript> for TranscriptResponse {
    fn from(transcript: ChatTranscript) -> Self {
        Self {
            messages: transcript.entries.into_iter().map(Into::into).collect(),
            session_name: transcript.session_name,
        }
    }
}

/// Response for a successful delete.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteChatResponse {
    pub success: bool,
}

/// One row of the session history.
#[derive(Debug, Clone, Serialize)]
pub struct ChatSummaryResponse {
    pub chat_id: String,
    pub session_name: String,
    pub created_at: String,
    pub turn_count: usize,
}

impl From<ChatSummary> for ChatSummaryResponse {
    fn from(summary: ChatSummary) -> Self {
        Self {
            chat_id: summary.chat_id.to_string(),
            session_name: summary.session_name,
            created_at: summary.created_at.as_datetime().to_rfc3339(),
            turn_count: summary.turn_count,
        }
    }
}

/// The owner's session history.
#[derive(Debug, Clone, Serialize)]
pub struct ChatListResponse {
    pub chats: Vec<ChatSummaryResponse>,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_message_request_deserializes_minimal() {
        let json = r#"{"message": "hello"}"#;
        let req: SendMessageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.message, "hello");
        assert!(req.chat_id.is_none());
        assert!(req.session_name.is_none());
    }

    #[test]
    fn send_message_request_deserializes_full() {
        let json = r#"{"message": "hi", "chat_id": "abc", "session_name": "My chat"}"#;
        let req: SendMessageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.chat_id.as_deref(), Some("abc"));
        assert_eq!(req.session_name.as_deref(), Some("My chat"));
    }

    #[test]
    fn transcript_entry_serializes_sender_tag() {
        let entry = TranscriptEntry {
            id: 1,
            sender: Speaker::Bot,
            text: "hi".to_string(),
        };
        let response: TranscriptEntryResponse = entry.into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["sender"], "bot");
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn delete_response_serializes_success_flag() {
        let json = serde_json::to_value(DeleteChatResponse { success: true }).unwrap();
        assert_eq!(json, serde_json::json!({"success": true}));
    }
}
