//! Rendering tags back into an editable input string

use super::builder::join_tag_parts;
use super::record::TagFields;

/// Characters that force a serialized part to be quoted
const QUOTE_CHARS: &[char] = &[',', ':', '='];

/// Build the string a user would edit to get `tags` back from the parser.
///
/// Each part holding `,`, `:` or `=` is double quoted. If any part left
/// unquoted contains a space the tags are joined with `", "`, otherwise with a
/// single space.
///
/// # Examples
///
/// ```
/// use tagging::domain::tags::{edit_string_for_tags, Tag};
///
/// let tags = [Tag::new("plain"), Tag::new("com,ma")];
/// assert_eq!(edit_string_for_tags(&tags), "plain \"com,ma\"");
/// ```
pub fn edit_string_for_tags<T: TagFields>(tags: &[T]) -> String {
    let mut use_commas = false;
    let mut quote = |part: Option<&str>| -> String {
        let part = part.unwrap_or("");
        if part.contains(QUOTE_CHARS) {
            format!("\"{}\"", part)
        } else {
            if part.contains(' ') {
                use_commas = true;
            }
            part.to_string()
        }
    };

    let names: Vec<String> = tags
        .iter()
        .map(|tag| {
            let namespace = quote(tag.namespace());
            let name = quote(Some(tag.name()));
            let value = quote(tag.value());
            join_tag_parts(&namespace, &name, &value)
        })
        .collect();

    let glue = if use_commas { ", " } else { " " };
    names.join(glue)
}
