//! ListChatsHandler - the owner's session history.

use std::sync::Arc;

use crate::domain::chat::ChatError;
use crate::domain::foundation::{ChatId, Timestamp, UserId};
use crate::ports::ChatRepository;

/// One row of the session history, newest first.
#[derive(Debug, Clone)]
pub struct ChatSummary {
    pub chat_id: ChatId,
    pub session_name: String,
    pub created_at: Timestamp,
    pub turn_count: usize,
}

/// Handler for the history listing.
pub struct ListChatsHandler {
    repository: Arc<dyn ChatRepository>,
}

impl ListChatsHandler {
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, owner: &UserId) -> Result<Vec<ChatSummary>, ChatError> {
        let sessions = self.repository.list_by_owner(owner).await?;
        Ok(sessions
            .iter()
            .map(|session| ChatSummary {
                chat_id: *session.id(),
                session_name: session.name().to_string(),
                created_at: *session.created_at(),
                turn_count: session.turn_count(),
            })
            .collect())
    }
}
