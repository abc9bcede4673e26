//! Application layer - session-manager handlers and response adapters.

pub mod handlers;
pub mod responders;
