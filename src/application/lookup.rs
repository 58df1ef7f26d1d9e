//! Resolving flexible tag input to stored tag records
//!
//! Callers may refer to tags by record, by canonical string or by id. The
//! store itself is supplied by the host through [`TagStore`]; an in-memory
//! implementation over `[Tag]` is provided.

use crate::domain::tags::{get_tag_parts, parse_tag_input, Tag, TagParts};
use crate::error::{Result, TaggingError};
use std::collections::BTreeSet;
use tracing::debug;

/// One reference to a tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagRef {
    Tag(Tag),
    Name(String),
    Id(u64),
}

impl From<Tag> for TagRef {
    fn from(tag: Tag) -> Self {
        TagRef::Tag(tag)
    }
}

impl From<&str> for TagRef {
    fn from(name: &str) -> Self {
        TagRef::Name(name.to_string())
    }
}

impl From<String> for TagRef {
    fn from(name: String) -> Self {
        TagRef::Name(name)
    }
}

impl From<u64> for TagRef {
    fn from(id: u64) -> Self {
        TagRef::Id(id)
    }
}

/// Input accepted by [`get_tag_list`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagListInput {
    Single(TagRef),
    List(Vec<TagRef>),
}

impl<T: Into<TagRef>> From<Vec<T>> for TagListInput {
    fn from(items: Vec<T>) -> Self {
        TagListInput::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<TagRef> for TagListInput {
    fn from(item: TagRef) -> Self {
        TagListInput::Single(item)
    }
}

impl From<Tag> for TagListInput {
    fn from(tag: Tag) -> Self {
        TagListInput::Single(TagRef::Tag(tag))
    }
}

impl From<&str> for TagListInput {
    fn from(input: &str) -> Self {
        TagListInput::Single(TagRef::from(input))
    }
}

/// Matches a set of tags: bare names with no namespace or value, plus exact
/// namespace/name/value triples
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagLookup {
    pub names: BTreeSet<String>,
    pub parts: Vec<TagParts>,
}

impl TagLookup {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.parts.is_empty()
    }

    pub fn matches(&self, tag: &Tag) -> bool {
        let plain = tag.namespace.as_deref().map_or(true, str::is_empty)
            && tag.value.as_deref().map_or(true, str::is_empty);

        (plain && self.names.contains(&tag.name))
            || self.parts.iter().any(|p| {
                tag.has_parts(p.namespace.as_deref(), &p.name, p.value.as_deref())
            })
    }
}

/// Lookup access to the host's tag records
pub trait TagStore {
    fn find_by_parts(&self, parts: &TagParts) -> Option<Tag>;

    fn find_by_id(&self, id: u64) -> Option<Tag>;

    fn filter(&self, lookup: &TagLookup) -> Vec<Tag>;

    fn filter_by_ids(&self, ids: &[u64]) -> Vec<Tag>;
}

impl TagStore for [Tag] {
    fn find_by_parts(&self, parts: &TagParts) -> Option<Tag> {
        self.iter()
            .find(|t| t.has_parts(parts.namespace.as_deref(), &parts.name, parts.value.as_deref()))
            .cloned()
    }

    fn find_by_id(&self, id: u64) -> Option<Tag> {
        self.iter().find(|t| t.id == id).cloned()
    }

    fn filter(&self, lookup: &TagLookup) -> Vec<Tag> {
        self.iter().filter(|t| lookup.matches(t)).cloned().collect()
    }

    fn filter_by_ids(&self, ids: &[u64]) -> Vec<Tag> {
        self.iter().filter(|t| ids.contains(&t.id)).cloned().collect()
    }
}

/// Build a lookup from user-entered strings.
///
/// Every string is parsed as tag input. Returns `None` when no valid tag was
/// found in any of them.
pub fn get_tag_filter_lookup<I, S>(inputs: I) -> Result<Option<TagLookup>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut canonical = BTreeSet::new();
    for input in inputs {
        canonical.extend(parse_tag_input(input.as_ref()));
    }

    let mut lookup = TagLookup::default();
    for tag in &canonical {
        let parts = get_tag_parts(tag)?;
        if parts.is_plain() {
            lookup.names.insert(parts.name);
        } else {
            lookup.parts.push(parts);
        }
    }

    Ok((!lookup.is_empty()).then_some(lookup))
}

/// Resolve one tag reference against `store`.
///
/// A record is returned as-is. Strings are split with
/// [`get_tag_parts`](crate::domain::tags::get_tag_parts) and may fail with
/// `MalformedTagExpression`; an unknown tag is `Ok(None)`.
pub fn get_tag<S: TagStore + ?Sized>(tag: impl Into<TagRef>, store: &S) -> Result<Option<Tag>> {
    match tag.into() {
        TagRef::Tag(tag) => Ok(Some(tag)),
        TagRef::Name(name) => {
            let parts = get_tag_parts(&name)?;
            Ok(store.find_by_parts(&parts))
        }
        TagRef::Id(id) => Ok(store.find_by_id(id)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum RefKind {
    Tag,
    Name,
    Id,
}

fn ref_kind(item: &TagRef) -> RefKind {
    match item {
        TagRef::Tag(_) => RefKind::Tag,
        TagRef::Name(_) => RefKind::Name,
        TagRef::Id(_) => RefKind::Id,
    }
}

/// Resolve flexible tag input into a list of records.
///
/// * a single record is returned as a one-element list
/// * a string may hold several tags and is parsed as tag input
/// * a list must hold only records, only strings or only ids
///
/// A bare id, or a list mixing kinds, fails with `InvalidTagListInput`.
pub fn get_tag_list<S: TagStore + ?Sized>(
    input: impl Into<TagListInput>,
    store: &S,
) -> Result<Vec<Tag>> {
    match input.into() {
        TagListInput::Single(TagRef::Tag(tag)) => Ok(vec![tag]),
        TagListInput::Single(TagRef::Name(input)) => Ok(get_tag_filter_lookup([input])?
            .map(|lookup| store.filter(&lookup))
            .unwrap_or_default()),
        TagListInput::Single(TagRef::Id(id)) => Err(TaggingError::InvalidTagListInput(format!(
            "The tag input given was invalid: {}",
            id
        ))),
        TagListInput::List(items) => resolve_list(items, store),
    }
}

fn resolve_list<S: TagStore + ?Sized>(items: Vec<TagRef>, store: &S) -> Result<Vec<Tag>> {
    let kinds: BTreeSet<RefKind> = items.iter().map(ref_kind).collect();
    let kind = match kinds.len() {
        0 => return Ok(Vec::new()),
        1 => kinds.into_iter().next(),
        _ => None,
    };
    debug!(?kind, items = items.len(), "resolving tag list");

    match kind {
        Some(RefKind::Tag) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                TagRef::Tag(tag) => Some(tag),
                _ => None,
            })
            .collect()),
        Some(RefKind::Name) => {
            let names = items.iter().filter_map(|item| match item {
                TagRef::Name(name) => Some(name.as_str()),
                _ => None,
            });
            Ok(get_tag_filter_lookup(names)?
                .map(|lookup| store.filter(&lookup))
                .unwrap_or_default())
        }
        Some(RefKind::Id) => {
            let ids: Vec<u64> = items
                .iter()
                .filter_map(|item| match item {
                    TagRef::Id(id) => Some(*id),
                    _ => None,
                })
                .collect();
            Ok(store.filter_by_ids(&ids))
        }
        None => Err(TaggingError::InvalidTagListInput(
            "If a list of tags is provided, they must all be tag names, tag records or tag ids."
                .to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Vec<Tag> {
        vec![
            Tag::new("cheese").with_id(1),
            Tag::new("toast").with_id(2),
            Tag::new("egg").with_id(3).with_namespace("spam"),
            Tag::new("bar").with_id(4).with_value("baz"),
        ]
    }

    #[test]
    fn test_lookup_separates_plain_names() {
        let lookup = get_tag_filter_lookup(["cheese spam:egg"]).unwrap().unwrap();
        assert_eq!(lookup.names, BTreeSet::from(["cheese".to_string()]));
        assert_eq!(lookup.parts, vec![TagParts::new(Some("spam"), "egg", None)]);
    }

    #[test]
    fn test_lookup_none_for_invalid_input() {
        assert_eq!(get_tag_filter_lookup(["="]).unwrap(), None);
        assert_eq!(get_tag_filter_lookup(Vec::<String>::new()).unwrap(), None);
    }

    #[test]
    fn test_plain_name_does_not_match_namespaced_tag() {
        let lookup = get_tag_filter_lookup(["egg"]).unwrap().unwrap();
        assert!(!lookup.matches(&Tag::new("egg").with_namespace("spam")));
        assert!(lookup.matches(&Tag::new("egg")));
    }

    #[test]
    fn test_get_tag_by_each_kind() {
        let store = store();
        let cheese = Tag::new("cheese").with_id(1);

        assert_eq!(get_tag(cheese.clone(), store.as_slice()).unwrap(), Some(cheese.clone()));
        assert_eq!(get_tag("cheese", store.as_slice()).unwrap(), Some(cheese.clone()));
        assert_eq!(get_tag(1u64, store.as_slice()).unwrap(), Some(cheese));
        assert_eq!(
            get_tag("bar=baz", store.as_slice()).unwrap().map(|t| t.id),
            Some(4)
        );
        assert_eq!(get_tag("mouse", store.as_slice()).unwrap(), None);
        assert_eq!(get_tag(99u64, store.as_slice()).unwrap(), None);
    }

    #[test]
    fn test_get_tag_malformed() {
        let store = store();
        assert!(matches!(
            get_tag("=oops", store.as_slice()),
            Err(TaggingError::MalformedTagExpression(_))
        ));
    }

    #[test]
    fn test_mixed_list_rejected() {
        let store = store();
        let input = TagListInput::List(vec![TagRef::from("cheese"), TagRef::from(store[1].clone())]);
        match get_tag_list(input, store.as_slice()) {
            Err(TaggingError::InvalidTagListInput(msg)) => assert!(msg.contains("must all be")),
            other => panic!("Expected InvalidTagListInput, got {:?}", other),
        }
    }

    #[test]
    fn test_bare_id_rejected() {
        let store = store();
        assert!(matches!(
            get_tag_list(TagRef::Id(29), store.as_slice()),
            Err(TaggingError::InvalidTagListInput(_))
        ));
    }
}
