//! Validating user tag input against configured settings

use crate::domain::tags::{check_tag_length, get_tag_parts, parse_tag_input, TagParts};
use crate::error::{Result, TaggingError};
use crate::infrastructure::TagSettings;
use tracing::debug;

/// Parse `input` and check every resulting tag against the length limits.
///
/// Returns the canonical tags. Lowercasing is applied first when the
/// settings force it.
pub fn clean_tag_input(input: &str, settings: &TagSettings) -> Result<Vec<String>> {
    let input = settings.apply_case(input);
    let tags = parse_tag_input(input.as_str());

    for tag in &tags {
        let parts = get_tag_parts(tag)?;
        check_tag_length(&parts, &settings.limits)?;
    }

    Ok(tags)
}

/// Parse `input` as exactly one tag, for operations that add a single tag.
///
/// Fails with `NoTagsGiven` or `MultipleTagsGiven` when the input holds zero
/// or several tags.
pub fn normalize_single_tag(input: &str, settings: &TagSettings) -> Result<TagParts> {
    let mut tags = clean_tag_input(input, settings)?;
    debug!(count = tags.len(), "parsed single tag input");

    match tags.len() {
        0 => Err(TaggingError::NoTagsGiven),
        1 => get_tag_parts(&tags.remove(0)),
        _ => Err(TaggingError::MultipleTagsGiven(tags)),
    }
}
