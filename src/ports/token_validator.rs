//! Token validation port.
//!
//! Identity is owned by an external provider; the HTTP layer only needs a
//! way to turn a bearer token into an [`AuthenticatedUser`].

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Port for validating bearer tokens.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Validates a token and returns the caller it identifies.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
