//! Splitting a single canonical tag string into its parts

use super::builder::{join_tag_parts, normalize_tag_part, PARSER_STOP_CHARS};
use super::record::TagFields;
use crate::error::{Result, TaggingError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// `(namespace ':')? name ('=' value)?`, each part either quoted or bare
fn tag_parts_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r#"^(?:(?P<namespace>"[^"]+"|[^:="]+):)?(?P<name>"[^"]+"|[^="]+)(?:=(?P<value>"[^"]+"|[^"]+))?"#,
        )
        .unwrap()
    })
}

/// The namespace, name and value of one tag, without quotes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TagParts {
    pub namespace: Option<String>,
    pub name: String,
    pub value: Option<String>,
}

impl TagParts {
    pub fn new(namespace: Option<&str>, name: &str, value: Option<&str>) -> Self {
        Self {
            namespace: namespace.map(str::to_string),
            name: name.to_string(),
            value: value.map(str::to_string),
        }
    }

    /// Whether this is a bare name with no namespace or value
    pub fn is_plain(&self) -> bool {
        self.namespace.as_deref().map_or(true, str::is_empty)
            && self.value.as_deref().map_or(true, str::is_empty)
    }

    /// Render as the canonical `namespace:name=value` string, quoting parts
    /// that contain `:` or `=`
    pub fn to_canonical(&self) -> String {
        let part = |p: Option<&str>| normalize_tag_part(p.unwrap_or(""), PARSER_STOP_CHARS);
        join_tag_parts(
            &part(self.namespace.as_deref()),
            &part(Some(self.name.as_str())),
            &part(self.value.as_deref()),
        )
    }
}

impl TagFields for TagParts {
    fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl FromStr for TagParts {
    type Err = TaggingError;

    fn from_str(s: &str) -> Result<Self> {
        get_tag_parts(s)
    }
}

impl fmt::Display for TagParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical())
    }
}

fn unquote(part: &str) -> &str {
    part.strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
        .unwrap_or(part)
}

/// Split one canonical tag string into its parts, removing quotes.
///
/// This matches the tag structurally and does not tokenize, so surrounding
/// whitespace is kept as part of the name.
///
/// # Examples
///
/// ```
/// use tagging::domain::tags::get_tag_parts;
///
/// let parts = get_tag_parts("foo:bar=baz").unwrap();
/// assert_eq!(parts.namespace.as_deref(), Some("foo"));
/// assert_eq!(parts.name, "bar");
/// assert_eq!(parts.value.as_deref(), Some("baz"));
/// ```
pub fn get_tag_parts(tag: &str) -> Result<TagParts> {
    let captures = tag_parts_regex()
        .captures(tag)
        .ok_or_else(|| TaggingError::MalformedTagExpression(tag.to_string()))?;

    let part = |key: &str| captures.name(key).map(|m| unquote(m.as_str()).to_string());

    Ok(TagParts {
        namespace: part("namespace"),
        name: part("name").unwrap_or_default(),
        value: part("value"),
    })
}
