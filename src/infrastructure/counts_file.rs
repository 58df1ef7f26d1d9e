//! Loading tag usage counts from a text file
//!
//! One tag per line as `<tag> <count>`, where `<tag>` is a canonical tag
//! string. Blank lines and lines starting with `#` are skipped.

use crate::domain::tags::{get_tag_parts, Tag};
use crate::domain::TagCount;
use crate::error::{Result, TaggingError};
use std::fs;
use std::path::Path;

/// Read `<tag> <count>` lines from `path`
pub fn load_counts(path: &Path) -> Result<Vec<TagCount>> {
    let contents = fs::read_to_string(path)?;
    parse_counts(&contents)
}

/// Parse `<tag> <count>` lines; the count is the last whitespace-separated field
pub fn parse_counts(contents: &str) -> Result<Vec<TagCount>> {
    let mut counts = Vec::new();

    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (tag, count) = line.rsplit_once(char::is_whitespace).ok_or_else(|| {
            TaggingError::CountsFile(format!(
                "line {}: expected '<tag> <count>', found '{}'",
                index + 1,
                line
            ))
        })?;

        let count: u64 = count.parse().map_err(|_| {
            TaggingError::CountsFile(format!(
                "line {}: invalid count '{}'",
                index + 1,
                count
            ))
        })?;

        let parts = get_tag_parts(tag.trim_end()).map_err(|e| {
            TaggingError::CountsFile(format!("line {}: {}", index + 1, e))
        })?;
        let record = Tag {
            id: counts.len() as u64 + 1,
            namespace: parts.namespace,
            name: parts.name,
            value: parts.value,
        };
        counts.push(TagCount::new(record, count));
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_counts() {
        let counts = parse_counts("# sample\nfoo 3\n\npaint:color=red 12\n").unwrap();

        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].tag, Tag::new("foo").with_id(1));
        assert_eq!(counts[0].count, 3);
        assert_eq!(
            counts[1].tag,
            Tag::new("color")
                .with_id(2)
                .with_namespace("paint")
                .with_value("red")
        );
        assert_eq!(counts[1].count, 12);
    }

    #[test]
    fn test_tag_with_spaces() {
        let counts = parse_counts("one:\"two three\"=four 5\n").unwrap();
        assert_eq!(counts[0].tag.name, "two three");
        assert_eq!(counts[0].count, 5);
    }

    #[test]
    fn test_missing_count() {
        match parse_counts("foo\n") {
            Err(TaggingError::CountsFile(msg)) => assert!(msg.contains("line 1")),
            other => panic!("Expected CountsFile error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_count() {
        match parse_counts("foo 1\nbar many\n") {
            Err(TaggingError::CountsFile(msg)) => {
                assert!(msg.contains("line 2"));
                assert!(msg.contains("many"));
            }
            other => panic!("Expected CountsFile error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_tag_reports_line() {
        match parse_counts("foo 1\n\n=bar 2\n") {
            Err(TaggingError::CountsFile(msg)) => {
                assert!(msg.contains("line 3"));
                assert!(msg.contains("Malformed tag expression"));
            }
            other => panic!("Expected CountsFile error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_counts_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("counts.txt");
        fs::write(&path, "a 1\nb 2\n").unwrap();

        let counts = load_counts(&path).unwrap();
        assert_eq!(counts.len(), 2);
    }
}
