//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod chat;
pub mod middleware;
pub mod news;

pub use chat::{chat_routes, ChatHandlers};
pub use news::{news_routes, NewsHandlers};
