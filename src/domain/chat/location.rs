//! Location extraction for weather-intent messages.

/// Returned when no location can be read out of the message.
pub const DEFAULT_LOCATION: &str = "India";

/// Pulls a place name out of a message.
///
/// Splits on whitespace and looks for the first literal token `in`; every
/// token after it, joined by single spaces, is the location. Falls back to
/// [`DEFAULT_LOCATION`] when `in` is absent or is the final token. The
/// token match is exact, so "In" or "inside" do not count.
pub fn extract_location(message: &str) -> String {
    let words: Vec<&str> = message.split_whitespace().collect();
    match words.iter().position(|word| *word == "in") {
        Some(index) if index + 1 < words.len() => words[index + 1..].join(" "),
        _ => DEFAULT_LOCATION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_token_after_in() {
        assert_eq!(extract_location("What's the weather in Paris"), "Paris");
    }

    #[test]
    fn joins_all_trailing_tokens() {
        assert_eq!(
            extract_location("weather in New York City"),
            "New York City"
        );
    }

    #[test]
    fn only_first_in_counts() {
        assert_eq!(
            extract_location("weather in Paris in France"),
            "Paris in France"
        );
    }

    #[test]
    fn defaults_when_in_is_absent() {
        assert_eq!(extract_location("how is the weather"), DEFAULT_LOCATION);
    }

    #[test]
    fn defaults_when_in_is_last_token() {
        assert_eq!(extract_location("what is the weather in"), DEFAULT_LOCATION);
    }

    #[test]
    fn token_match_is_exact() {
        assert_eq!(extract_location("weather In Paris"), DEFAULT_LOCATION);
        assert_eq!(extract_location("weather inside Paris"), DEFAULT_LOCATION);
    }

    #[test]
    fn empty_message_defaults() {
        assert_eq!(extract_location(""), DEFAULT_LOCATION);
    }
}
