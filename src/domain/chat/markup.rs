//! Display markup for backend replies.
//!
//! Replies are rendered for an HTML transcript: star-marker emphasis
//! becomes `<b>` tags and newlines become `<br>` tags. Triple markers are
//! rewritten before double markers so `***text***` does not leave a stray
//! pair behind.

use once_cell::sync::Lazy;
use regex::Regex;

static TRIPLE_EMPHASIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*\*(.*?)\*\*\*").expect("triple emphasis pattern"));
static DOUBLE_EMPHASIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("double emphasis pattern"));

/// Rewrites `***text***` and `**text**` emphasis to `<b>text</b>`.
pub fn emphasis_to_bold(text: &str) -> String {
    let text = TRIPLE_EMPHASIS.replace_all(text, "<b>$1</b>");
    DOUBLE_EMPHASIS.replace_all(&text, "<b>$1</b>").into_owned()
}

/// Replaces newlines with `<br>` tags.
pub fn newlines_to_breaks(text: &str) -> String {
    text.replace('\n', "<br>")
}

/// Full reply rendering: emphasis first, then line breaks.
pub fn render_reply(text: &str) -> String {
    newlines_to_breaks(&emphasis_to_bold(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_emphasis_becomes_bold() {
        assert_eq!(emphasis_to_bold("a **bold** word"), "a <b>bold</b> word");
    }

    #[test]
    fn triple_emphasis_becomes_bold() {
        assert_eq!(emphasis_to_bold("***very bold***"), "<b>very bold</b>");
    }

    #[test]
    fn emphasis_is_non_greedy() {
        assert_eq!(
            emphasis_to_bold("**one** and **two**"),
            "<b>one</b> and <b>two</b>"
        );
    }

    #[test]
    fn newlines_become_breaks() {
        assert_eq!(newlines_to_breaks("line1\nline2"), "line1<br>line2");
    }

    #[test]
    fn render_reply_applies_both() {
        assert_eq!(
            render_reply("**title**\nbody"),
            "<b>title</b><br>body"
        );
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(render_reply("plain text"), "plain text");
    }
}
