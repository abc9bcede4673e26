//! Chat session aggregate.
//!
//! A session is one conversation thread: an owner, a lazily-assigned
//! display name, and the two newline-delimited turn logs. Sessions only
//! ever grow; turns are never edited or reordered.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ChatId, Timestamp, UserId};

use super::transcript::{self, Turn};

/// Maximum length of the display name, in characters.
pub const MAX_NAME_LENGTH: usize = 50;

/// Chat session aggregate.
///
/// # Invariants
///
/// - `name` is at most [`MAX_NAME_LENGTH`] characters
/// - the logs grow only through [`ChatSession::append_turn`]
/// - intended (not enforced): both logs hold the same number of segments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    /// Unique identifier.
    id: ChatId,

    /// User who owns this session; all access is scoped to them.
    owner: UserId,

    /// Display label. Empty until assigned (see [`ChatSession::named`]).
    name: String,

    /// Newline-delimited user messages.
    message_log: String,

    /// Newline-delimited backend replies, aligned by position.
    response_log: String,

    /// When the session was created.
    created_at: Timestamp,
}

impl ChatSession {
    /// Creates an empty, unnamed session (the explicit-create path).
    ///
    /// A session created this way keeps its empty name even across later
    /// appends; only the implicit-create path derives one.
    pub fn new(id: ChatId, owner: UserId) -> Self {
        Self {
            id,
            owner,
            name: String::new(),
            message_log: String::new(),
            response_log: String::new(),
            created_at: Timestamp::now(),
        }
    }

    /// Creates a session named for its first message (the implicit-create
    /// path).
    ///
    /// The name is the provided label when non-empty, otherwise the first
    /// [`MAX_NAME_LENGTH`] characters of the message; either way it is
    /// truncated to the limit.
    pub fn named(id: ChatId, owner: UserId, label: Option<&str>, first_message: &str) -> Self {
        let mut session = Self::new(id, owner);
        session.name = derive_name(label, first_message);
        session
    }

    /// Reconstitutes a session from persistence (no validation).
    pub fn reconstitute(
        id: ChatId,
        owner: UserId,
        name: String,
        message_log: String,
        response_log: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner,
            name,
            message_log,
            response_log,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ChatId {
        &self.id
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message_log(&self) -> &str {
        &self.message_log
    }

    pub fn response_log(&self) -> &str {
        &self.response_log
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Checks if the given user owns this session.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.owner == user_id
    }

    /// Number of recorded user turns.
    pub fn turn_count(&self) -> usize {
        if self.message_log.is_empty() {
            0
        } else {
            self.message_log.split('\n').count()
        }
    }

    /// Decodes the logs into ordered turns.
    pub fn turns(&self) -> Vec<Turn> {
        transcript::decode(&self.message_log, &self.response_log)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Records one exchange, appending to both logs.
    pub fn append_turn(&mut self, user_text: &str, bot_text: &str) {
        transcript::append_segment(&mut self.message_log, user_text);
        transcript::append_segment(&mut self.response_log, bot_text);
    }
}

/// Derives the display name for an implicitly-created session.
fn derive_name(label: Option<&str>, first_message: &str) -> String {
    let source = match label {
        Some(label) if !label.is_empty() => label,
        _ => first_message,
    };
    source.chars().take(MAX_NAME_LENGTH).collect()
}
