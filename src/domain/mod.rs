//! Domain layer - Tag parsing, serialization and cloud weighting

pub mod cloud;
pub mod tags;

pub use cloud::{calculate_cloud, CloudWeighted, Distribution, TagCount};
pub use tags::{Tag, TagParts};
