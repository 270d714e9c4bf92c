//! Candidate file selection.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default file-name marker: `protoc-gen-go` output.
fn default_marker() -> String {
    String::from(".pb.go")
}

const fn default_include_hidden() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WalkConfig {
    /// Substring a file name must contain to be processed.
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Honour `.gitignore` and friends while walking. Off by default since
    /// generated sources are often ignored.
    #[serde(default)]
    pub respect_gitignore: bool,

    /// Descend into hidden directories and consider hidden files.
    #[serde(default = "default_include_hidden")]
    pub include_hidden: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            respect_gitignore: false,
            include_hidden: default_include_hidden(),
        }
    }
}

impl WalkConfig {
    /// Whether a file name selects the file for processing.
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.contains(&self.marker)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.marker.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "walk.marker".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
