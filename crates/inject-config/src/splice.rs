//! Output formatting for injected fields.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One level of Go indentation.
fn default_indent() -> String {
    String::from("\t")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpliceConfig {
    /// Prefix written before every injected field.
    #[serde(default = "default_indent")]
    pub indent: String,
}

impl Default for SpliceConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
        }
    }
}

impl SpliceConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.indent.is_empty() || !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(ConfigError::InvalidValue {
                field: "splice.indent".to_string(),
                reason: format!("must be spaces or tabs, got {:?}", self.indent),
            });
        }
        Ok(())
    }
}
