//! Tag length limits

use super::record::TagFields;
use crate::error::{Result, TagDimension, TaggingError};
use serde::{Deserialize, Serialize};

/// Maximum lengths, in characters, for a tag and each of its parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagLimits {
    /// Namespace, name and value together; delimiters are not counted
    pub max_tag_length: usize,
    pub max_tag_name_length: usize,
    pub max_tag_namespace_length: usize,
    pub max_tag_value_length: usize,
}

impl Default for TagLimits {
    fn default() -> Self {
        TagLimits {
            max_tag_length: 150,
            max_tag_name_length: 50,
            max_tag_namespace_length: 50,
            max_tag_value_length: 50,
        }
    }
}

/// Check a tag against `limits`.
///
/// Parts are checked before the total, in the order name, namespace, value,
/// and the first violation is reported. Absent parts count as zero.
pub fn check_tag_length<T: TagFields + ?Sized>(tag: &T, limits: &TagLimits) -> Result<()> {
    let len = |part: Option<&str>| part.map_or(0, |p| p.chars().count());

    let name_len = len(Some(tag.name()));
    let namespace_len = len(tag.namespace());
    let value_len = len(tag.value());

    let checks = [
        (name_len, limits.max_tag_name_length, TagDimension::Name),
        (namespace_len, limits.max_tag_namespace_length, TagDimension::Namespace),
        (value_len, limits.max_tag_value_length, TagDimension::Value),
        (
            name_len + namespace_len + value_len,
            limits.max_tag_length,
            TagDimension::Tag,
        ),
    ];

    for (length, limit, dimension) in checks {
        if length > limit {
            return Err(TaggingError::TagTooLong { dimension, limit });
        }
    }

    Ok(())
}
