//! Authenticated caller identity.
//!
//! Identity is owned by an external provider; this service only carries the
//! validated subject through request handling for ownership scoping.

use thiserror::Error;

use super::UserId;

/// A caller whose bearer token has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Subject identifier from the identity provider.
    pub id: UserId,
}

impl AuthenticatedUser {
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}

/// Token validation failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid token")]
    InvalidToken,

    #[error("token expired")]
    TokenExpired,

    #[error("authentication service unavailable: {0}")]
    ServiceUnavailable(String),
}
