//! Pass-through validator: the bearer token is the caller's identity.
//!
//! Stands in for the external identity provider. Every non-empty token is
//! accepted and used verbatim as the user id; swapping in a real IdP
//! client only replaces this adapter.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::TokenValidator;

/// Validator that trusts the token as the subject itself.
#[derive(Debug, Default, Clone)]
pub struct BearerIdentityValidator;

impl BearerIdentityValidator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TokenValidator for BearerIdentityValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        UserId::new(token)
            .map(AuthenticatedUser::new)
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn token_becomes_user_id() {
        let validator = BearerIdentityValidator::new();
        let user = validator.validate("user-42").await.unwrap();
        assert_eq!(user.id.as_str(), "user-42");
    }

    #[tokio::test]
    async fn empty_token_is_invalid() {
        let validator = BearerIdentityValidator::new();
        assert_eq!(
            validator.validate("").await.unwrap_err(),
            AuthError::InvalidToken
        );
    }
}
