//! Chat-specific error types.

use crate::domain::foundation::ChatId;
use crate::ports::RepositoryError;

/// Failures that cross the session-manager boundary.
///
/// Backend failures never appear here; the response adapters absorb them
/// into fallback reply text, so only NotFound and infrastructure failures
/// are surfaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// Chat absent, or owned by a different user.
    NotFound(ChatId),
    /// Persistence failure.
    Infrastructure(String),
}

impl ChatError {
    pub fn not_found(id: ChatId) -> Self {
        ChatError::NotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ChatError::Infrastructure(message.into())
    }

    pub fn message(&self) -> String {
        match self {
            ChatError::NotFound(id) => format!("Chat not found: {}", id),
            ChatError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ChatError {}

impl From<RepositoryError> for ChatError {
    fn from(err: RepositoryError) -> Self {
        ChatError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_chat() {
        let id = ChatId::new();
        let err = ChatError::not_found(id);
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn repository_errors_map_to_infrastructure() {
        let err: ChatError = RepositoryError::storage("connection reset").into();
        assert!(matches!(err, ChatError::Infrastructure(_)));
    }
}
