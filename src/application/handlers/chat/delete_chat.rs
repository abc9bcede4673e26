//! DeleteChatHandler - remove a session.

use std::sync::Arc;

use crate::domain::chat::ChatError;
use crate::domain::foundation::{ChatId, UserId};
use crate::ports::ChatRepository;

/// Command to delete one session.
#[derive(Debug, Clone)]
pub struct DeleteChatCommand {
    pub chat_id: ChatId,
    pub owner: UserId,
}

/// Handler for the delete operation.
pub struct DeleteChatHandler {
    repository: Arc<dyn ChatRepository>,
}

impl DeleteChatHandler {
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteChatCommand) -> Result<(), ChatError> {
        let deleted = self.repository.delete(&cmd.chat_id, &cmd.owner).await?;
        if deleted {
            Ok(())
        } else {
            Err(ChatError::NotFound(cmd.chat_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryChatRepository;

    fn owner() -> UserId {
        UserId::new("user-1").unwrap()
    }

    #[tokio::test]
    async fn deletes_owned_session() {
        let repository = Arc::new(InMemoryChatRepository::new());
        let session = repository.create(&owner()).await.unwrap();

        let handler = DeleteChatHandler::new(repository.clone());
        handler
            .handle(DeleteChatCommand {
                chat_id: *session.id(),
                owner: owner(),
            })
            .await
            .unwrap();

        assert!(repository.is_empty());
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let repository = Arc::new(InMemoryChatRepository::new());
        let handler = DeleteChatHandler::new(repository);

        let missing = ChatId::new();
        let result = handler
            .handle(DeleteChatCommand {
                chat_id: missing,
                owner: owner(),
            })
            .await;
        assert_eq!(result.unwrap_err(), ChatError::NotFound(missing));
    }

    #[tokio::test]
    async fn foreign_session_is_not_found_and_kept() {
        let repository = Arc::new(InMemoryChatRepository::new());
        let session = repository.create(&owner()).await.unwrap();

        let handler = DeleteChatHandler::new(repository.clone());
        let result = handler
            .handle(DeleteChatCommand {
                chat_id: *session.id(),
                owner: UserId::new("someone-else").unwrap(),
            })
            .await;

        assert_eq!(result.unwrap_err(), ChatError::NotFound(*session.id()));
        assert_eq!(repository.len(), 1);
    }
}
