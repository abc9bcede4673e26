//! LoadChatHandler - decode a session for display.

use std::sync::Arc;

use crate::domain::chat::{flatten, ChatError, TranscriptEntry};
use crate::domain::foundation::{ChatId, UserId};
use crate::ports::ChatRepository;

/// Query for one session's transcript.
#[derive(Debug, Clone)]
pub struct LoadChatQuery {
    pub chat_id: ChatId,
    pub owner: UserId,
}

/// The decoded, display-ready conversation.
#[derive(Debug, Clone)]
pub struct ChatTranscript {
    pub entries: Vec<TranscriptEntry>,
    pub session_name: String,
}

/// Handler for the display-decode operation.
pub struct LoadChatHandler {
    repository: Arc<dyn ChatRepository>,
}

impl LoadChatHandler {
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: LoadChatQuery) -> Result<ChatTranscript, ChatError> {
        let session = self
            .repository
            .get(&query.chat_id, &query.owner)
            .await?
            .ok_or(ChatError::NotFound(query.chat_id))?;

        Ok(ChatTranscript {
            entries: flatten(&session.turns()),
            session_name: session.name().to_string(),
        })
    }
}
