//! Standalone news lookup.

mod latest_news;

pub use latest_news::LatestNewsHandler;
