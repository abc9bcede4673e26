//! CreateChatHandler - explicitly start an empty session.

use std::sync::Arc;

use crate::domain::chat::ChatError;
use crate::domain::foundation::{ChatId, UserId};
use crate::ports::ChatRepository;

/// Result of explicit session creation.
#[derive(Debug, Clone)]
pub struct CreateChatResult {
    pub chat_id: ChatId,
}

/// Handler for the explicit-create operation.
///
/// Sessions created here have empty logs and an empty name; the name stays
/// empty even after later appends address the session by id.
pub struct CreateChatHandler {
    repository: Arc<dyn ChatRepository>,
}

impl CreateChatHandler {
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, owner: &UserId) -> Result<CreateChatResult, ChatError> {
        let session = self.repository.create(owner).await?;
        Ok(CreateChatResult {
            chat_id: *session.id(),
        })
    }
}
