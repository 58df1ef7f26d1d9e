//! Tag system

pub mod builder;
pub mod length;
pub mod parser;
pub mod parts;
pub mod record;
pub mod serializer;
pub mod tokenizer;

// Re-export main types
pub use builder::{build_tag, normalize_tag_part};
pub use length::{check_tag_length, TagLimits};
pub use parser::{parse_tag_input, split_strip};
pub use parts::{get_tag_parts, TagParts};
pub use record::{Tag, TagFields};
pub use serializer::edit_string_for_tags;
pub use tokenizer::{Token, TokenKind, Tokenizer};
