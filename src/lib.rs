//! Switchboard - Conversational assistant backend.
//!
//! Routes a user's chat turn to an external knowledge backend (generative
//! text, news search, or weather lookup) and records the exchange in a
//! persisted, append-only session log.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
