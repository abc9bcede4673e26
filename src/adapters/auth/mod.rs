//! Token validation adapters.
//!
//! Identity is owned by an external provider; these adapters stand in at
//! the seam where a real IdP client would plug in.

mod bearer_identity;
mod mock;

pub use bearer_identity::BearerIdentityValidator;
pub use mock::MockTokenValidator;
