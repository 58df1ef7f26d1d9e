//! Infrastructure layer - Configuration and file input

pub mod config;
pub mod counts_file;

pub use config::TagSettings;
pub use counts_file::{load_counts, parse_counts};
