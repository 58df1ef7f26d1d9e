//! Parsing of user-entered tag input
//!
//! Input is split into words on commas when any loose (unquoted) comma is
//! present, and on whitespace otherwise. Double quotes group characters and
//! may contain commas.
//!
//! # Examples
//!
//! ```
//! use tagging::domain::tags::parse_tag_input;
//!
//! assert_eq!(parse_tag_input("one two three"), vec!["one", "three", "two"]);
//! assert_eq!(parse_tag_input("first:one two"), vec!["first:one", "two"]);
//! assert_eq!(parse_tag_input("a-one, a-two and a-three"), vec!["a-one", "a-two and a-three"]);
//! ```

use super::builder::build_tag;
use super::tokenizer::{needs_tokenizing, Token, TokenKind, Tokenizer};
use std::collections::BTreeSet;
use tracing::debug;

/// Parse tag input into a sorted list of unique canonical tag strings.
///
/// `None` and empty input give an empty list. Words that normalize to nothing
/// are dropped silently.
pub fn parse_tag_input<'a>(input: impl Into<Option<&'a str>>) -> Vec<String> {
    let input = match input.into() {
        Some(input) if !input.is_empty() => input,
        _ => return Vec::new(),
    };

    if !needs_tokenizing(input) {
        debug!("no special characters, splitting on whitespace");
        let words: BTreeSet<&str> = input.split_whitespace().collect();
        return words.into_iter().map(str::to_string).collect();
    }

    let tokens: Vec<Token<'_>> = Tokenizer::new(input).collect();
    let delimiter = if tokens.iter().any(|t| t.kind == TokenKind::Comma) {
        TokenKind::Comma
    } else {
        TokenKind::Space
    };
    debug!(?delimiter, tokens = tokens.len(), "tokenized tag input");

    let mut tags = BTreeSet::new();
    let mut word: Vec<&str> = Vec::new();
    for token in &tokens {
        if token.kind == delimiter {
            collect_word(&word, &mut tags);
            word.clear();
        } else {
            word.push(token.content);
        }
    }
    collect_word(&word, &mut tags);

    tags.into_iter().collect()
}

fn collect_word(word: &[&str], tags: &mut BTreeSet<String>) {
    match build_tag(word) {
        Some(tag) => {
            tags.insert(tag);
        }
        None if !word.is_empty() => debug!(?word, "discarding empty tag"),
        None => {}
    }
}

/// Split `input` on `delimiter`, trim each piece and drop the empty ones.
///
/// # Examples
///
/// ```
/// use tagging::domain::tags::split_strip;
///
/// assert_eq!(split_strip(", foo , bar ,", ","), vec!["foo", "bar"]);
/// ```
pub fn split_strip<'a>(input: impl Into<Option<&'a str>>, delimiter: &str) -> Vec<String> {
    input
        .into()
        .map(|input| {
            input
                .split(delimiter)
                .map(str::trim)
                .filter(|word| !word.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_simple_space_delimited_tags() {
        assert_eq!(parse_tag_input("one"), vec!["one"]);
        assert_eq!(parse_tag_input("one two"), vec!["one", "two"]);
        assert_eq!(parse_tag_input("one two three"), vec!["one", "three", "two"]);
        assert_eq!(parse_tag_input("one one two two"), vec!["one", "two"]);
        assert_eq!(parse_tag_input("first:one"), vec!["first:one"]);
        assert_eq!(parse_tag_input("first:one two"), vec!["first:one", "two"]);
        assert_eq!(
            parse_tag_input("one= second:two :three"),
            vec!["one", "second:two", "three"]
        );
        assert_eq!(
            parse_tag_input(":one= second:two :three"),
            vec!["one", "second:two", "three"]
        );
        assert_eq!(
            parse_tag_input(":one= :two= =three:"),
            vec!["one", "three", "two"]
        );
        assert_eq!(
            parse_tag_input("=one=two :three:four"),
            vec!["\"three:four\"", "one=two"]
        );
        assert_eq!(
            parse_tag_input(":=one:two=three=:"),
            vec!["\"one:two\"=\"three=:\""]
        );
        assert_eq!(
            parse_tag_input("first:one first:one second:one"),
            vec!["first:one", "second:one"]
        );
        assert_eq!(
            parse_tag_input("one=two one=three"),
            vec!["one=three", "one=two"]
        );
        assert_eq!(
            parse_tag_input("second:one=three first:one=two"),
            vec!["first:one=two", "second:one=three"]
        );
        assert_eq!(
            parse_tag_input("first:one:two=three:four=five"),
            vec!["first:\"one:two\"=\"three:four=five\""]
        );
    }

    #[test]
    fn test_with_comma_delimited_multiple_words() {
        assert_eq!(parse_tag_input(",one"), vec!["one"]);
        assert_eq!(parse_tag_input(",one two"), vec!["one two"]);
        assert_eq!(parse_tag_input("one two,"), vec!["one two"]);
        assert_eq!(parse_tag_input(",one two three"), vec!["one two three"]);
        assert_eq!(
            parse_tag_input("a-one, a-two and a-three"),
            vec!["a-one", "a-two and a-three"]
        );
        assert_eq!(
            parse_tag_input("a:one, a:two and a=three"),
            vec!["a:one", "a:two and a=three"]
        );
        assert_eq!(
            parse_tag_input("a:one, a:two and a:three"),
            vec!["a:\"two and a:three\"", "a:one"]
        );
        assert_eq!(
            parse_tag_input("a:one, a:one=two a:one=two"),
            vec!["a:one", "a:one=\"two a:one=two\""]
        );
    }

    #[test]
    fn test_with_double_quoted_multiple_words() {
        assert_eq!(parse_tag_input("\"one"), vec!["one"]);
        assert_eq!(parse_tag_input("one\""), vec!["one"]);
        assert_eq!(parse_tag_input("\"one two"), vec!["one", "two"]);
        assert_eq!(parse_tag_input("\"one two\""), vec!["one two"]);
        assert_eq!(parse_tag_input("\"one\"\"two\" \"three\""), vec!["onetwo", "three"]);
        assert_eq!(parse_tag_input("\":one"), vec!["one"]);
        assert_eq!(parse_tag_input("one=\""), vec!["one"]);
        assert_eq!(parse_tag_input("\"one:two\""), vec!["\"one:two\""]);
        assert_eq!(parse_tag_input("one:\"two three\""), vec!["one:two three"]);
        assert_eq!(
            parse_tag_input("\"one:\"two\"=three\""),
            vec!["\"one:two=three\""]
        );
        assert_eq!(
            parse_tag_input("\"one:\"two\"=three"),
            vec!["\"one:two\"=three"]
        );
        assert_eq!(
            parse_tag_input(":\"=one\":two=three=:"),
            vec!["\"=one:two\"=\"three=:\""]
        );
    }

    #[test]
    fn test_loose_and_quoted_commas() {
        assert_eq!(
            parse_tag_input("one two \"thr,ee\""),
            vec!["one", "thr,ee", "two"]
        );
        assert_eq!(parse_tag_input("one two:\"thr,ee\""), vec!["one", "two:thr,ee"]);
        assert_eq!(
            parse_tag_input("\"one\", two:three four=five"),
            vec!["one", "two:three four=five"]
        );
        assert_eq!(
            parse_tag_input("a-one \"a-two, and a-three\""),
            vec!["a-one", "a-two, and a-three"]
        );
        assert_eq!(
            parse_tag_input("\"two\", one, one, two, \"one\""),
            vec!["one", "two"]
        );
    }

    #[test]
    fn test_with_naughty_input() {
        assert!(parse_tag_input(None).is_empty());
        assert!(parse_tag_input("").is_empty());
        assert!(parse_tag_input("\"").is_empty());
        assert!(parse_tag_input("\"\"").is_empty());
        assert!(parse_tag_input("\"".repeat(7).as_str()).is_empty());
        assert!(parse_tag_input(",,,,,,").is_empty());
        assert_eq!(parse_tag_input("\",\",\",\",\",\",\",\""), vec![","]);
        assert_eq!(parse_tag_input(",\",\",\",\",\",\",\",\""), vec![","]);
        assert!(parse_tag_input(":").is_empty());
        assert_eq!(parse_tag_input(":::::::"), vec!["\"::::::\""]);
        assert!(parse_tag_input("=").is_empty());
        assert!(parse_tag_input("=".repeat(7).as_str()).is_empty());
        assert!(parse_tag_input(":,:,=,=,:,=,:,=").is_empty());
        assert!(parse_tag_input(":= := =: =: : = = :").is_empty());
        assert_eq!(
            parse_tag_input("\":\":\":\":\"=\"=\"=\":\"=\""),
            vec!["\":\":\"::=\"=\"=:=\""]
        );
        assert_eq!(
            parse_tag_input("a-one \"a-two\" and \"a-three"),
            vec!["a-one", "a-three", "a-two", "and"]
        );
    }

    #[test]
    fn test_fast_path_splits_on_any_whitespace() {
        assert_eq!(parse_tag_input("  b\ta\n b  "), vec!["a", "b"]);
    }

    #[test]
    fn test_split_strip() {
        assert_eq!(split_strip(" foo ", ","), vec!["foo"]);
        assert_eq!(split_strip(" foo , bar ", ","), vec!["foo", "bar"]);
        assert_eq!(split_strip(" foo\t,\nbar ", ","), vec!["foo", "bar"]);
        assert_eq!(split_strip(" foo bar ", " "), vec!["foo", "bar"]);
        assert!(split_strip("", ",").is_empty());
        assert!(split_strip(None, ",").is_empty());
    }
}
