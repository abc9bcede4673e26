//! Mock token validator with a fixed token table.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::TokenValidator;

/// Validator backed by an explicit token → user table.
#[derive(Debug, Default)]
pub struct MockTokenValidator {
    tokens: HashMap<String, UserId>,
}

impl MockTokenValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token for a user.
    pub fn with_token(mut self, token: impl Into<String>, user_id: UserId) -> Self {
        self.tokens.insert(token.into(), user_id);
        self
    }
}

#[async_trait]
impl TokenValidator for MockTokenValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.tokens
            .get(token)
            .cloned()
            .map(AuthenticatedUser::new)
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_token_validates() {
        let validator = MockTokenValidator::new()
            .with_token("secret", UserId::new("user-1").unwrap());
        let user = validator.validate("secret").await.unwrap();
        assert_eq!(user.id.as_str(), "user-1");
    }

    #[tokio::test]
    async fn unknown_token_is_rejected() {
        let validator = MockTokenValidator::new();
        assert!(validator.validate("nope").await.is_err());
    }
}
