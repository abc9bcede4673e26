//! Chat repository port.
//!
//! The persistence engine is an external collaborator; this port treats it
//! as an opaque keyed store of [`ChatSession`] entities. Existence is
//! reported through `Option`/`bool` return values, never by raising -
//! `NotFound` decisions belong to the application layer.
//!
//! Every read and delete is owner-scoped: a session that exists but
//! belongs to another user is indistinguishable from one that does not
//! exist.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::chat::ChatSession;
use crate::domain::foundation::{ChatId, UserId};

/// Infrastructure failure inside a repository implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("storage error: {0}")]
    Storage(String),
}

impl RepositoryError {
    pub fn storage(message: impl Into<String>) -> Self {
        RepositoryError::Storage(message.into())
    }
}

/// Port for chat session persistence.
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Fetches a session scoped to its owner.
    ///
    /// Returns `Ok(None)` when the id is unknown or the session belongs to
    /// a different user.
    async fn get(&self, id: &ChatId, owner: &UserId)
        -> Result<Option<ChatSession>, RepositoryError>;

    /// Creates and persists a new empty session for the owner.
    async fn create(&self, owner: &UserId) -> Result<ChatSession, RepositoryError>;

    /// Persists a session (insert or update by id).
    async fn save(&self, session: &ChatSession) -> Result<(), RepositoryError>;

    /// Deletes a session scoped to its owner.
    ///
    /// Returns `Ok(false)` when nothing matched.
    async fn delete(&self, id: &ChatId, owner: &UserId) -> Result<bool, RepositoryError>;

    /// All sessions owned by a user, newest first.
    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<ChatSession>, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ChatRepository) {}
    }
}
