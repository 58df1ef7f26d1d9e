//! Tokenizer for raw tag input

use regex::Regex;
use std::sync::OnceLock;
use tracing::trace;

/// `:`, `=`, a closed double-quoted run, or a bare run of ordinary characters
fn part_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#"^(?:[:=]|"[^"]*"|[^,\s:="]+)"#).unwrap())
}

fn space_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\s+").unwrap())
}

fn comma_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\s*,\s*").unwrap())
}

/// Like the part pattern, but quotes are ordinary characters
fn char_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(?:[:=]|[^,\s:=]+)").unwrap())
}

/// Token kinds, tried in this order at every position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Part,
    Space,
    Comma,
    Char,
}

/// One atomic piece of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub content: &'a str,
}

/// Lazily splits input into [`Token`]s.
///
/// Every non-empty suffix starts with whitespace, a comma, `:`, `=` or some
/// other character, so one of the four patterns always matches and the scan
/// always advances.
pub struct Tokenizer<'a> {
    rest: &'a str,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { rest: input }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let patterns = [
            (part_regex(), TokenKind::Part),
            (space_regex(), TokenKind::Space),
            (comma_regex(), TokenKind::Comma),
            (char_regex(), TokenKind::Char),
        ];

        for (regex, kind) in patterns {
            if let Some(m) = regex.find(self.rest) {
                if m.end() == 0 {
                    continue;
                }
                let (content, rest) = self.rest.split_at(m.end());
                self.rest = rest;
                trace!(?kind, content, "token");
                return Some(Token { kind, content });
            }
        }

        // Unreachable for any non-empty input; stop rather than spin.
        self.rest = "";
        None
    }
}

/// Whether the input can skip tokenizing and be split on whitespace
pub fn needs_tokenizing(input: &str) -> bool {
    input.contains([',', '"', ':', '='])
}
