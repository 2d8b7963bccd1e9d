//! The default word tokenizer.

/// Split raw text into whitespace-delimited tokens.
///
/// Leading and trailing spaces and newlines are trimmed, then the text is
/// split on single spaces. No quoting, no locale handling; consecutive
/// spaces produce empty tokens, which contribute no symbols downstream.
pub fn simple_tokenize(text: &str) -> Vec<&str> {
    text.trim_matches(|c| matches!(c, '\r' | '\n' | ' '))
        .split(' ')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_spaces() {
        assert_eq!(
            simple_tokenize("hello world el melodies"),
            vec!["hello", "world", "el", "melodies"]
        );
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(simple_tokenize("\r\n hello world \n"), vec!["hello", "world"]);
    }

    #[test]
    fn test_consecutive_spaces_yield_empty_tokens() {
        assert_eq!(simple_tokenize("a  b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(simple_tokenize(""), vec![""]);
    }
}
