//! Chat module - the conversation session aggregate and its protocols.
//!
//! A chat session is an owned, append-only pair of newline-delimited logs
//! (user messages and backend replies). The modules here cover the
//! aggregate itself, the turn-log codec, intent classification, location
//! extraction for weather queries, and reply markup.

mod aggregate;
mod errors;
mod intent;
mod location;
mod markup;
mod transcript;

pub use aggregate::{ChatSession, MAX_NAME_LENGTH};
pub use errors::ChatError;
pub use intent::Intent;
pub use location::{extract_location, DEFAULT_LOCATION};
pub use markup::{emphasis_to_bold, newlines_to_breaks, render_reply};
pub use transcript::{decode, flatten, Speaker, TranscriptEntry, Turn};
