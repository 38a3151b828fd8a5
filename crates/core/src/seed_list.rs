//! Seed list prompt and answer parsing.
//!
//! The chat-completion answer is a numbered list in one string:
//!
//! ```text
//! 1. Staubsaugen in allen Zimmern
//! 2. Wäsche waschen und bügeln
//! ```
//!
//! Each line becomes one to-do description. Everything up to and including
//! the first space is the ordinal token and is dropped, whatever it looks
//! like (`"1."`, `"3)"`, `"-"`). A line without any space cannot be split and
//! is reported as [`SeedListError::MissingDelimiter`].
//!
//! # Examples
//!
//! ```
//! use todo_core::seed_list::descriptions;
//!
//! let parsed: Result<Vec<_>, _> = descriptions("1. Fenster putzen\n2. Pflanzen gießen").collect();
//! assert_eq!(parsed.unwrap(), vec!["Fenster putzen", "Pflanzen gießen"]);
//! ```

/// Default topic sent in the seed prompt.
pub const DEFAULT_TOPIC: &str = "household";

/// Default number of items requested in the seed prompt.
pub const DEFAULT_ITEM_COUNT: u32 = 10;

/// Errors from splitting a seed answer into descriptions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedListError {
    /// The line has no space separating the ordinal from the description.
    #[error("Seed answer line {line_number} has no space delimiter: {line:?}")]
    MissingDelimiter {
        /// 1-based position of the line in the answer.
        line_number: usize,
        /// The offending line, verbatim.
        line: String,
    },
}

/// What the seed prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPrompt {
    pub topic: String,
    pub item_count: u32,
}

impl SeedPrompt {
    pub fn new(topic: impl Into<String>, item_count: u32) -> Self {
        Self {
            topic: topic.into(),
            item_count,
        }
    }

    /// The user message sent to the chat-completion endpoint.
    pub fn text(&self) -> String {
        format!(
            "Generate a list of {} to-do items for the topic: {}",
            self.item_count, self.topic
        )
    }
}

impl Default for SeedPrompt {
    fn default() -> Self {
        Self::new(DEFAULT_TOPIC, DEFAULT_ITEM_COUNT)
    }
}

/// Drop the leading ordinal token of a single answer line.
///
/// Returns the text after the first space, or `None` when the line has no
/// space at all.
pub fn strip_ordinal(line: &str) -> Option<&str> {
    line.find(' ').map(|idx| &line[idx + 1..])
}

/// Split a raw answer into descriptions, one per `'\n'`-separated line.
///
/// Lines are not trimmed, so a trailing newline yields a final empty line,
/// which fails with [`SeedListError::MissingDelimiter`]. Callers consume the
/// iterator in order and may stop at the first error.
pub fn descriptions(answer: &str) -> impl Iterator<Item = Result<&str, SeedListError>> + '_ {
    answer.split('\n').enumerate().map(|(idx, line)| {
        strip_ordinal(line).ok_or_else(|| SeedListError::MissingDelimiter {
            line_number: idx + 1,
            line: line.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn collect(answer: &str) -> Result<Vec<&str>, SeedListError> {
        descriptions(answer).collect()
    }

    #[test]
    fn numbered_lines_lose_their_ordinal() {
        let parsed =
            collect("1. Staubsaugen in allen Zimmern\n2. Wäsche waschen und bügeln").unwrap();
        assert_eq!(
            parsed,
            vec!["Staubsaugen in allen Zimmern", "Wäsche waschen und bügeln"]
        );
    }

    #[test]
    fn any_token_before_first_space_is_dropped() {
        assert_eq!(strip_ordinal("3) Fenster putzen"), Some("Fenster putzen"));
        assert_eq!(strip_ordinal("- Müll rausbringen"), Some("Müll rausbringen"));
        assert_eq!(strip_ordinal("Boden wischen"), Some("wischen"));
    }

    #[test]
    fn only_the_first_space_splits() {
        assert_eq!(
            strip_ordinal("10.  Badezimmer putzen (WC, Dusche)"),
            Some(" Badezimmer putzen (WC, Dusche)")
        );
    }

    #[test]
    fn leading_space_keeps_whole_remainder() {
        assert_eq!(strip_ordinal(" Pflanzen gießen"), Some("Pflanzen gießen"));
    }

    #[test]
    fn space_at_end_yields_empty_description() {
        assert_eq!(collect("3. ").unwrap(), vec![""]);
    }

    #[test]
    fn carriage_returns_are_not_trimmed() {
        assert_eq!(
            collect("1. Fenster\r\n2. Boden").unwrap(),
            vec!["Fenster\r", "Boden"]
        );
    }

    #[test]
    fn line_without_space_is_an_error() {
        let err = collect("1. Fenster putzen\nEinkaufen\n3. Boden").unwrap_err();
        assert_matches!(
            err,
            SeedListError::MissingDelimiter { line_number: 2, ref line } if line == "Einkaufen"
        );
    }

    #[test]
    fn trailing_newline_fails_on_the_empty_last_line() {
        let results: Vec<_> = descriptions("1. Fenster putzen\n").collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], Ok("Fenster putzen"));
        assert_matches!(
            &results[1],
            Err(SeedListError::MissingDelimiter { line_number: 2, line }) if line.is_empty()
        );
    }

    #[test]
    fn empty_answer_is_one_empty_line() {
        assert_matches!(
            collect(""),
            Err(SeedListError::MissingDelimiter { line_number: 1, .. })
        );
    }

    #[test]
    fn default_prompt_asks_for_ten_household_items() {
        assert_eq!(
            SeedPrompt::default().text(),
            "Generate a list of 10 to-do items for the topic: household"
        );
    }

    #[test]
    fn custom_prompt() {
        assert_eq!(
            SeedPrompt::new("garden", 5).text(),
            "Generate a list of 5 to-do items for the topic: garden"
        );
    }
}
