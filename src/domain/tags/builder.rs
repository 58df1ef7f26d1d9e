//! Assembles the tokens of one word into a canonical tag string

/// Characters that force a parsed part to be quoted
pub const PARSER_STOP_CHARS: &[char] = &[':', '='];

/// Token contents collapsed to what the builder cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'a> {
    Colon,
    Equals,
    Content(&'a str),
}

impl<'a> Piece<'a> {
    fn from_raw(raw: &'a str) -> Self {
        match raw {
            ":" => Piece::Colon,
            "=" => Piece::Equals,
            other => Piece::Content(other),
        }
    }

    fn text(&self) -> &'a str {
        match self {
            Piece::Colon => ":",
            Piece::Equals => "=",
            Piece::Content(text) => text,
        }
    }
}

/// Which buffer the next piece lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No separator seen yet
    Left,
    /// `:` opened a namespace/name split
    AfterColon,
    /// `:` then `=`; everything else is the value
    AfterColonEquals,
    /// `=` opened a name/value split with no namespace
    AfterEquals,
}

/// Strip quotes from a part and re-quote it if it holds any of `stop_chars`.
///
/// Quotes are removed, never escaped; an empty result stays empty.
pub fn normalize_tag_part(input: &str, stop_chars: &[char]) -> String {
    let stripped = input.replace('"', "");
    if stripped.is_empty() {
        return stripped;
    }
    if stripped.contains(stop_chars) {
        format!("\"{}\"", stripped)
    } else {
        stripped
    }
}

/// Join already-normalized parts into `namespace:name=value`
pub fn join_tag_parts(namespace: &str, name: &str, value: &str) -> String {
    let mut tag = String::with_capacity(namespace.len() + name.len() + value.len() + 2);
    if !namespace.is_empty() {
        tag.push_str(namespace);
        tag.push(':');
    }
    tag.push_str(name);
    if !value.is_empty() {
        tag.push('=');
        tag.push_str(value);
    }
    tag
}

/// Build a canonical tag from the raw token contents of one word.
///
/// The first `:` opens the namespace, the first `=` with content before it
/// opens the value. A `:` or `=` that cannot open a split is dropped, and a
/// namespace with no name after it collapses back into the name. Returns
/// `None` when the name normalizes to nothing.
pub fn build_tag(tokens: &[&str]) -> Option<String> {
    let pieces: Vec<Piece<'_>> = tokens.iter().map(|raw| Piece::from_raw(raw)).collect();

    if !pieces
        .iter()
        .any(|p| matches!(p, Piece::Colon | Piece::Equals))
    {
        let name = normalize_tag_part(&tokens.concat(), PARSER_STOP_CHARS);
        return (!name.is_empty()).then_some(name);
    }

    let mut left = String::new();
    let mut middle = String::new();
    let mut right = String::new();
    let mut state = State::Left;

    for piece in pieces {
        state = match (state, piece) {
            (State::Left, Piece::Colon) => State::AfterColon,
            (State::Left, Piece::Equals) if !left.is_empty() => State::AfterEquals,
            (State::Left, Piece::Equals) => State::Left,
            (State::Left, Piece::Content(text)) => {
                left.push_str(text);
                State::Left
            }
            (State::AfterColon, Piece::Equals) if !middle.is_empty() => State::AfterColonEquals,
            (State::AfterColon, Piece::Equals) => State::AfterColon,
            (State::AfterColon, other) => {
                middle.push_str(other.text());
                State::AfterColon
            }
            (State::AfterColonEquals, other) => {
                right.push_str(other.text());
                State::AfterColonEquals
            }
            (State::AfterEquals, other) => {
                middle.push_str(other.text());
                State::AfterEquals
            }
        };
    }

    let (namespace, name, value) = match state {
        State::AfterEquals => ("", left.as_str(), middle.as_str()),
        _ if !middle.is_empty() => (left.as_str(), middle.as_str(), right.as_str()),
        _ => ("", left.as_str(), ""),
    };

    let name = normalize_tag_part(name, PARSER_STOP_CHARS);
    if name.is_empty() {
        return None;
    }

    Some(join_tag_parts(
        &normalize_tag_part(namespace, PARSER_STOP_CHARS),
        &name,
        &normalize_tag_part(value, PARSER_STOP_CHARS),
    ))
}
