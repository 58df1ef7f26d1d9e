//! CLI command definitions

use crate::domain::cloud::DEFAULT_STEPS;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagging")]
#[command(about = "Parse, serialize and weigh tags", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (default: $TAGGING_CONFIG, then ./tagging.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse tag input and print one canonical tag per line
    Parse {
        /// Raw tag input, e.g. 'one "two three" paint:color=red'
        input: String,

        /// Also check every tag against the configured length limits
        #[arg(long)]
        check: bool,
    },

    /// Print the namespace, name and value of one canonical tag
    Parts {
        tag: String,
    },

    /// Join canonical tags into one editable string
    Edit {
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Check one tag against the configured length limits
    Check {
        tag: String,
    },

    /// Assign font sizes to tags from a file of '<tag> <count>' lines
    Cloud {
        file: PathBuf,

        /// Number of font sizes
        #[arg(short, long, default_value_t = DEFAULT_STEPS)]
        steps: usize,

        /// Weight distribution: logarithmic (or log), linear; case-insensitive
        #[arg(short, long, default_value = "logarithmic")]
        distribution: String,
    },

    /// Show the effective settings
    Config {
        /// Write the effective settings to ./tagging.toml
        #[arg(long)]
        init: bool,
    },
}
