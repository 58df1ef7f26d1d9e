//! Tag records exchanged with the host application

use serde::{Deserialize, Serialize};

/// Read access to the three parts of a tag.
///
/// Implemented by stored [`Tag`] records and by parsed
/// [`TagParts`](super::parts::TagParts), so either can be serialized or
/// length-checked.
pub trait TagFields {
    fn namespace(&self) -> Option<&str>;
    fn name(&self) -> &str;
    fn value(&self) -> Option<&str>;
}

/// A tag record as held by the host's store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub namespace: Option<String>,
    pub name: String,
    pub value: Option<String>,
}

impl Tag {
    /// Create a plain tag with no namespace or value
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            namespace: None,
            name: name.into(),
            value: None,
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Whether this record has the given parts, treating empty strings as absent
    pub fn has_parts(&self, namespace: Option<&str>, name: &str, value: Option<&str>) -> bool {
        fn present(part: Option<&str>) -> Option<&str> {
            part.filter(|p| !p.is_empty())
        }

        self.name == name
            && present(self.namespace.as_deref()) == present(namespace)
            && present(self.value.as_deref()) == present(value)
    }
}

impl TagFields for Tag {
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
