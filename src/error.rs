//! Error types for tagging

use std::fmt;
use thiserror::Error;

/// Which part of a tag a length limit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagDimension {
    Tag,
    Name,
    Namespace,
    Value,
}

impl TagDimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagDimension::Tag => "tag",
            TagDimension::Name => "name",
            TagDimension::Namespace => "namespace",
            TagDimension::Value => "value",
        }
    }
}

impl fmt::Display for TagDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn too_long_message(dimension: &TagDimension, limit: &usize) -> String {
    match dimension {
        TagDimension::Tag => format!("Each tag may be no more than {} characters long.", limit),
        part => format!(
            "Each tag's {} may be no more than {} characters long.",
            part, limit
        ),
    }
}

/// Main error type for the tagging library
#[derive(Debug, Error)]
pub enum TaggingError {
    #[error("Invalid tag list input: {0}")]
    InvalidTagListInput(String),

    #[error("Malformed tag expression: {0}")]
    MalformedTagExpression(String),

    #[error("{}", too_long_message(.dimension, .limit))]
    TagTooLong {
        dimension: TagDimension,
        limit: usize,
    },

    #[error("Invalid distribution algorithm specified: {0}.")]
    InvalidDistribution(String),

    #[error("Invalid number of cloud steps: {0}")]
    InvalidSteps(usize),

    #[error("No tags were given")]
    NoTagsGiven,

    #[error("Multiple tags were given: {}", .0.join(" "))]
    MultipleTagsGiven(Vec<String>),

    #[error("Invalid counts file: {0}")]
    CountsFile(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl TaggingError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TaggingError::InvalidTagListInput(_)
            | TaggingError::MalformedTagExpression(_)
            | TaggingError::InvalidDistribution(_)
            | TaggingError::InvalidSteps(_)
            | TaggingError::NoTagsGiven
            | TaggingError::MultipleTagsGiven(_)
            | TaggingError::CountsFile(_) => 2,
            TaggingError::TagTooLong { .. } => 3,
            TaggingError::Config(_) | TaggingError::TomlDeserialize(_) => 4,
            TaggingError::Io(_) => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TaggingError::MalformedTagExpression(input) => {
                format!(
                    "Malformed tag expression: '{}'\n\n\
                    A tag is written as namespace:name=value, where namespace and value are optional.\n\
                    Examples:\n\
                    • color\n\
                    • paint:color=red\n\
                    • \"a:b\"=c  (quote parts containing ':' or '=')",
                    input
                )
            }
            TaggingError::TagTooLong { dimension, limit } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Shorten the tag so its {} fits within {} characters\n\
                    • Raise the limit in tagging.toml if longer tags are expected",
                    self, dimension, limit
                )
            }
            TaggingError::InvalidDistribution(value) => {
                format!(
                    "Invalid distribution algorithm specified: {}.\n\n\
                    Valid distributions: logarithmic, linear\n\
                    Example: tagging cloud counts.txt --distribution linear",
                    value
                )
            }
            TaggingError::MultipleTagsGiven(tags) => {
                format!(
                    "Expected a single tag, found {}: {}\n\n\
                    Suggestions:\n\
                    • Quote the tag if it contains spaces or commas (e.g., \"two words\")",
                    tags.len(),
                    tags.join(", ")
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TaggingError
pub type Result<T> = std::result::Result<T, TaggingError>;
