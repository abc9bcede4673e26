//! In-memory implementation of ChatRepository.
//!
//! A mutex-guarded map, suitable for tests and single-process development
//! runs. Owner scoping matches the SQL adapter: a foreign-owned session is
//! reported as absent.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::chat::ChatSession;
use crate::domain::foundation::{ChatId, UserId};
use crate::ports::{ChatRepository, RepositoryError};

/// In-memory implementation of [`ChatRepository`].
#[derive(Default)]
pub struct InMemoryChatRepository {
    sessions: Mutex<HashMap<ChatId, ChatSession>>,
}

impl InMemoryChatRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions, across all owners.
    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn get(
        &self,
        id: &ChatId,
        owner: &UserId,
    ) -> Result<Option<ChatSession>, RepositoryError> {
        let sessions = self.sessions.lock().unwrap();
        Ok(sessions
            .get(id)
            .filter(|session| session.is_owner(owner))
            .cloned())
    }

    async fn create(&self, owner: &UserId) -> Result<ChatSession, RepositoryError> {
        let session = ChatSession::new(ChatId::new(), owner.clone());
        self.sessions
            .lock()
            .unwrap()
            .insert(*session.id(), session.clone());
        Ok(session)
    }

    async fn save(&self, session: &ChatSession) -> Result<(), RepositoryError> {
        self.sessions
            .lock()
            .unwrap()
            .insert(*session.id(), session.clone());
        Ok(())
    }

    async fn delete(&self, id: &ChatId, owner: &UserId) -> Result<bool, RepositoryError> {
        let mut sessions = self.sessions.lock().unwrap();
        let owned = sessions
            .get(id)
            .map(|session| session.is_owner(owner))
            .unwrap_or(false);
        if owned {
            sessions.remove(id);
        }
        Ok(owned)
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<ChatSession>, RepositoryError> {
        let sessions = self.sessions.lock().unwrap();
        let mut owned: Vec<ChatSession> = sessions
            .values()
            .filter(|session| session.is_owner(owner))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn stranger() -> UserId {
        UserId::new("user-2").unwrap()
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let repo = InMemoryChatRepository::new();
        let created = repo.create(&owner()).await.unwrap();

        let fetched = repo.get(created.id(), &owner()).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn get_hides_foreign_sessions() {
        let repo = InMemoryChatRepository::new();
        let created = repo.create(&owner()).await.unwrap();

        let fetched = repo.get(created.id(), &stranger()).await.unwrap();
        assert_eq!(fetched, None);
    }

    #[tokio::test]
    async fn save_updates_existing_session() {
        let repo = InMemoryChatRepository::new();
        let mut session = repo.create(&owner()).await.unwrap();
        session.append_turn("m1", "r1");
        repo.save(&session).await.unwrap();

        let fetched = repo.get(session.id(), &owner()).await.unwrap().unwrap();
        assert_eq!(fetched.message_log(), "m1");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn delete_reports_match() {
        let repo = InMemoryChatRepository::new();
        let session = repo.create(&owner()).await.unwrap();

        assert!(repo.delete(session.id(), &owner()).await.unwrap());
        assert!(!repo.delete(session.id(), &owner()).await.unwrap());
    }

    #[tokio::test]
    async fn delete_refuses_foreign_sessions() {
        let repo = InMemoryChatRepository::new();
        let session = repo.create(&owner()).await.unwrap();

        assert!(!repo.delete(session.id(), &stranger()).await.unwrap());
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn list_is_owner_scoped_and_newest_first() {
        let repo = InMemoryChatRepository::new();
        let first = ChatSession::reconstitute(
            ChatId::new(),
            owner(),
            String::new(),
            String::new(),
            String::new(),
            crate::domain::foundation::Timestamp::from_datetime(
                chrono::Utc::now() - chrono::Duration::seconds(60),
            ),
        );
        repo.save(&first).await.unwrap();
        let second = repo.create(&owner()).await.unwrap();
        repo.create(&stranger()).await.unwrap();

        let listed = repo.list_by_owner(&owner()).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id(), second.id());
        assert_eq!(listed[1].id(), first.id());
    }
}
