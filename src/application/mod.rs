//! Application layer - Use cases and orchestration

pub mod lookup;
pub mod validate;

pub use lookup::{
    get_tag, get_tag_filter_lookup, get_tag_list, TagListInput, TagLookup, TagRef, TagStore,
};
pub use validate::{clean_tag_input, normalize_single_tag};
