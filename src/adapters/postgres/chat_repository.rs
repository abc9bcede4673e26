//! PostgreSQL implementation of ChatRepository.
//!
//! Owner scoping happens in SQL: every read and delete filters on both id
//! and owner, so a foreign-owned session behaves exactly like a missing
//! one. `save` is an upsert keyed on id; single-row statement atomicity is
//! the only isolation relied upon for concurrent appends.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::chat::ChatSession;
use crate::domain::foundation::{ChatId, Timestamp, UserId};
use crate::ports::{ChatRepository, RepositoryError};

/// PostgreSQL implementation of [`ChatRepository`].
#[derive(Clone)]
pub struct PostgresChatRepository {
    pool: PgPool,
}

impl PostgresChatRepository {
    /// Creates a new PostgresChatRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatRepository for PostgresChatRepository {
    async fn get(
        &self,
        id: &ChatId,
        owner: &UserId,
    ) -> Result<Option<ChatSession>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, owner, name, message_log, response_log, created_at
            FROM chats
            WHERE id = $1 AND owner = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::storage(format!("Failed to fetch chat: {}", e)))?;

        row.map(row_to_session).transpose()
    }

    async fn create(&self, owner: &UserId) -> Result<ChatSession, RepositoryError> {
        let session = ChatSession::new(ChatId::new(), owner.clone());
        self.save(&session).await?;
        Ok(session)
    }

    async fn save(&self, session: &ChatSession) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO chats (id, owner, name, message_log, response_log, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                message_log = EXCLUDED.message_log,
                response_log = EXCLUDED.response_log
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.owner().as_str())
        .bind(session.name())
        .bind(session.message_log())
        .bind(session.response_log())
        .bind(session.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::storage(format!("Failed to save chat: {}", e)))?;

        Ok(())
    }

    async fn delete(&self, id: &ChatId, owner: &UserId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM chats WHERE id = $1 AND owner = $2")
            .bind(id.as_uuid())
            .bind(owner.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::storage(format!("Failed to delete chat: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<ChatSession>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner, name, message_log, response_log, created_at
            FROM chats
            WHERE owner = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::storage(format!("Failed to list chats: {}", e)))?;

        rows.into_iter().map(row_to_session).collect()
    }
}

fn row_to_session(row: sqlx::postgres::PgRow) -> Result<ChatSession, RepositoryError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| RepositoryError::storage(format!("Invalid chat row: {}", e)))?;
    let owner: String = row
        .try_get("owner")
        .map_err(|e| RepositoryError::storage(format!("Invalid chat row: {}", e)))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| RepositoryError::storage(format!("Invalid chat row: {}", e)))?;
    let message_log: String = row
        .try_get("message_log")
        .map_err(|e| RepositoryError::storage(format!("Invalid chat row: {}", e)))?;
    let response_log: String = row
        .try_get("response_log")
        .map_err(|e| RepositoryError::storage(format!("Invalid chat row: {}", e)))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| RepositoryError::storage(format!("Invalid chat row: {}", e)))?;

    let owner = UserId::new(owner)
        .ok_or_else(|| RepositoryError::storage("Chat row has empty owner"))?;

    Ok(ChatSession::reconstitute(
        ChatId::from_uuid(id),
        owner,
        name,
        message_log,
        response_log,
        Timestamp::from_datetime(created_at),
    ))
}
