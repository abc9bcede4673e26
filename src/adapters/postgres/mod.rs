//! PostgreSQL adapters.

mod chat_repository;

pub use chat_repository::PostgresChatRepository;
