//! Output formatting utilities

use crate::domain::tags::TagParts;
use crate::domain::TagCount;
use crate::infrastructure::TagSettings;

/// Format canonical tags one per line
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found\n".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(tag);
        output.push('\n');
    }

    output
}

/// Format the three parts of a tag; absent parts print as `-`
pub fn format_tag_parts(parts: &TagParts) -> String {
    format!(
        "namespace: {}\nname: {}\nvalue: {}\n",
        parts.namespace.as_deref().unwrap_or("-"),
        parts.name,
        parts.value.as_deref().unwrap_or("-")
    )
}

/// Format cloud results as `<font_size>\t<tag>` lines
pub fn format_cloud(tags: &[TagCount]) -> String {
    if tags.is_empty() {
        return "No tags found\n".to_string();
    }

    let mut output = String::new();
    for entry in tags {
        let parts = TagParts {
            namespace: entry.tag.namespace.clone(),
            name: entry.tag.name.clone(),
            value: entry.tag.value.clone(),
        };
        let size = entry
            .font_size
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        output.push_str(&format!("{}\t{}\n", size, parts));
    }

    output
}

/// Format settings the way they appear in tagging.toml
pub fn format_settings(settings: &TagSettings) -> String {
    format!(
        "max_tag_length = {}\n\
        max_tag_name_length = {}\n\
        max_tag_namespace_length = {}\n\
        max_tag_value_length = {}\n\
        force_lowercase = {}\n",
        settings.limits.max_tag_length,
        settings.limits.max_tag_name_length,
        settings.limits.max_tag_namespace_length,
        settings.limits.max_tag_value_length,
        settings.force_lowercase
    )
}
