//! Turn log codec.
//!
//! A session stores its conversation as two flat strings: every user
//! message appended to `message_log` and every backend reply appended to
//! `response_log`, each delimited by `\n` (the first segment of an empty
//! log takes no leading delimiter).
//!
//! # Reconstruction rule
//!
//! Decoding is an asymmetric zip, not a strict pairwise join: the message
//! segments drive the walk, and the response segment at the same index is
//! attached only if that index exists in the response list. Message
//! segments beyond the response count become user-only turns. Divergent
//! log lengths therefore decode to a lopsided turn list instead of
//! failing.

use serde::Serialize;

/// Appends one segment to a log, inserting the delimiter unless the log is
/// empty.
pub(crate) fn append_segment(log: &mut String, text: &str) {
    if !log.is_empty() {
        log.push('\n');
    }
    log.push_str(text);
}

/// One logical exchange reconstructed from the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Zero-based position in the conversation.
    pub index: usize,
    /// What the user sent.
    pub user_text: String,
    /// The paired backend reply, absent when the response log is shorter.
    pub bot_text: Option<String>,
}

/// Decodes the two logs into ordered turns.
///
/// An empty message log decodes to no turns at all rather than a single
/// empty segment.
pub fn decode(message_log: &str, response_log: &str) -> Vec<Turn> {
    if message_log.is_empty() {
        return Vec::new();
    }

    let responses: Vec<&str> = if response_log.is_empty() {
        Vec::new()
    } else {
        response_log.split('\n').collect()
    };

    message_log
        .split('\n')
        .enumerate()
        .map(|(index, user_text)| Turn {
            index,
            user_text: user_text.to_string(),
            bot_text: responses.get(index).map(|text| text.to_string()),
        })
        .collect()
}

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

/// One line of the flattened display transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    /// Sequential 1-based display id.
    pub id: usize,
    pub sender: Speaker,
    pub text: String,
}

/// Flattens turns into the alternating user/bot display list.
///
/// Each turn contributes a user entry and, when paired, a bot entry; ids
/// are assigned sequentially starting at 1.
pub fn flatten(turns: &[Turn]) -> Vec<TranscriptEntry> {
    let mut entries = Vec::with_capacity(turns.len() * 2);
    for turn in turns {
        entries.push(TranscriptEntry {
            id: entries.len() + 1,
            sender: Speaker::User,
            text: turn.user_text.clone(),
        });
        if let Some(bot_text) = &turn.bot_text {
            entries.push(TranscriptEntry {
                id: entries.len() + 1,
                sender: Speaker::Bot,
                text: bot_text.clone(),
            });
        }
    }
    entries
}
