//! Configuration management

use crate::domain::tags::TagLimits;
use crate::error::{Result, TaggingError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default config file name, looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "tagging.toml";

/// Environment variable pointing at a config file
pub const CONFIG_ENV_VAR: &str = "TAGGING_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagSettings {
    #[serde(flatten)]
    pub limits: TagLimits,

    /// Lowercase tag input before parsing and edit strings after serializing
    pub force_lowercase: bool,
}

impl TagSettings {
    /// Load settings from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TaggingError::Config(format!("Config file not found: {}", path.display()))
            } else {
                TaggingError::Io(e)
            }
        })?;

        let settings: TagSettings = toml::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| TaggingError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, contents)?;

        Ok(())
    }

    /// Find the settings to use.
    ///
    /// An explicit path wins, then `TAGGING_CONFIG`, then `tagging.toml` in
    /// `dir`. With none of those present the defaults apply.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => std::env::var_os(CONFIG_ENV_VAR)
                .map(PathBuf::from)
                .or_else(|| Some(dir.join(CONFIG_FILE_NAME)).filter(|p| p.exists())),
        };

        match path {
            Some(path) => {
                debug!(path = %path.display(), "loading tagging config");
                Self::load_from_file(&path)
            }
            None => {
                debug!("no tagging config found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reject limits that no tag could satisfy
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("max_tag_length", self.limits.max_tag_length),
            ("max_tag_name_length", self.limits.max_tag_name_length),
            ("max_tag_namespace_length", self.limits.max_tag_namespace_length),
            ("max_tag_value_length", self.limits.max_tag_value_length),
        ];

        for (key, value) in limits {
            if value == 0 {
                return Err(TaggingError::Config(format!(
                    "'{}' must be a positive integer",
                    key
                )));
            }
        }

        Ok(())
    }

    /// Lowercase `input` if `force_lowercase` is set
    pub fn apply_case(&self, input: &str) -> String {
        if self.force_lowercase {
            input.to_lowercase()
        } else {
            input.to_string()
        }
    }
}
