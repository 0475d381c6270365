/// Splits `text` into its non-empty whitespace-delimited tokens. Whitespace
/// is whatever Rust's `char::is_whitespace` considers whitespace, which
/// tracks the Unicode `White_Space` property. No case-folding, no stemming,
/// no stop-word removal — the term a caller types in is the term stored.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_runs_of_whitespace() {
        assert_eq!(tokenize("a b  c\td\n\ne"), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn trims_leading_and_trailing_whitespace() {
        assert_eq!(tokenize("  hello world  "), vec!["hello", "world"]);
    }

    #[test]
    fn empty_string_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn does_not_lowercase_or_strip_punctuation() {
        assert_eq!(tokenize("Hello, World!"), vec!["Hello,", "World!"]);
    }

    #[test]
    fn unicode_whitespace_counts() {
        // U+00A0 NO-BREAK SPACE, U+3000 IDEOGRAPHIC SPACE
        assert_eq!(tokenize("a\u{00A0}b\u{3000}c"), vec!["a", "b", "c"]);
    }
}
