//! Line tokenizer for the location export.
//!
//! A token is either a double-quoted run (quotes kept) or a maximal run of
//! characters that are not quotes, commas, or whitespace, and it must be
//! followed by optional whitespace and then a comma or the end of the line.
//! Empty fields produce no token, which is why rows from different sources
//! end up with different token counts.

use std::sync::LazyLock;

use regex::Regex;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(".*?"|[^",\s]+)\s*(?:,|$)"#).expect("valid regex"));

/// Ordered tokens of one input line, borrowed from the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> RawRow<'a> {
    #[must_use]
    pub fn new(tokens: Vec<&'a str>) -> Self {
        Self { tokens }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).copied()
    }

    #[must_use]
    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }
}

/// Split one line into tokens.
///
/// A quoted field containing commas stays a single token. Lines with
/// unbalanced quotes still tokenize; whatever the rule matches is returned.
#[must_use]
pub fn tokenize_line(line: &str) -> RawRow<'_> {
    let tokens = TOKEN_RE
        .captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();
    RawRow::new(tokens)
}

/// True when the line has an odd number of double quotes.
#[must_use]
pub fn has_unbalanced_quotes(line: &str) -> bool {
    line.bytes().filter(|&b| b == b'"').count() % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_fields() {
        let row = tokenize_line("1,abc,43.37,-79.79");
        assert_eq!(row.tokens(), ["1", "abc", "43.37", "-79.79"]);
    }

    #[test]
    fn quoted_field_with_embedded_comma_is_one_token() {
        let row = tokenize_line(r#"7,"12 Main St, Hamilton ON",905"#);
        assert_eq!(row.tokens(), ["7", r#""12 Main St, Hamilton ON""#, "905"]);
    }

    #[test]
    fn hours_blob_stays_whole() {
        let line = r#"1,"{'_type': 'hoursOfOperation', 'fri': '12AM'}",x"#;
        let row = tokenize_line(line);
        assert_eq!(row.len(), 3);
        assert_eq!(
            row.get(1),
            Some(r#""{'_type': 'hoursOfOperation', 'fri': '12AM'}""#)
        );
    }

    #[test]
    fn empty_fields_produce_no_token() {
        let row = tokenize_line("a,,b,,,c");
        assert_eq!(row.tokens(), ["a", "b", "c"]);
    }

    #[test]
    fn unquoted_field_with_space_keeps_only_last_word() {
        let row = tokenize_line("1,4000 MAINWAY,9053192663");
        assert_eq!(row.tokens(), ["1", "MAINWAY", "9053192663"]);
    }

    #[test]
    fn whitespace_before_comma_and_carriage_return_are_tolerated() {
        let row = tokenize_line("a ,b\r");
        assert_eq!(row.tokens(), ["a", "b"]);
    }

    #[test]
    fn empty_line_has_no_tokens() {
        assert!(tokenize_line("").is_empty());
    }

    #[test]
    fn unbalanced_quotes_are_detected() {
        assert!(has_unbalanced_quotes(r#"1,"open,2"#));
        assert!(!has_unbalanced_quotes(r#"1,"a,b",2"#));
        assert!(!has_unbalanced_quotes("1,2,3"));
    }

    #[test]
    fn unbalanced_quotes_still_yield_tokens() {
        let row = tokenize_line(r#"1,"open,2"#);
        assert_eq!(row.get(0), Some("1"));
        assert_eq!(row.tokens().last(), Some(&"2"));
    }
}
