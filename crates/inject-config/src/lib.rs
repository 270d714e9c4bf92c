//! # inject-config
//!
//! Layered configuration loading for inject-field using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`INJECT_FIELD_*` prefix, `__` as separator)
//! 2. Project-level `<root>/.inject-field.toml`
//! 3. User-level `~/.config/inject-field/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `INJECT_FIELD_WALK__MARKER` -> `walk.marker` and
//! `INJECT_FIELD_SPLICE__INDENT` -> `splice.indent`.
//!
//! # Usage
//!
//! ```no_run
//! use inject_config::InjectConfig;
//! use std::path::Path;
//!
//! let config = InjectConfig::load(Path::new(".")).expect("config");
//! assert!(config.walk.matches("user.pb.go"));
//! ```

mod error;
mod splice;
mod walk;

pub use error::ConfigError;
pub use splice::SpliceConfig;
pub use walk::WalkConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the project-local config, looked up in the walked root.
pub const PROJECT_CONFIG_FILE: &str = ".inject-field.toml";

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "INJECT_FIELD_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InjectConfig {
    #[serde(default)]
    pub walk: WalkConfig,
    #[serde(default)]
    pub splice: SpliceConfig,
}

impl InjectConfig {
    /// Load and validate configuration for a walk rooted at `root`.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`INJECT_FIELD_*` prefix)
    /// 2. `<root>/.inject-field.toml`
    /// 3. `~/.config/inject-field/config.toml`
    /// 4. Default values
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment(root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = root.join(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values the walker or splicer cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.walk.validate()?;
        self.splice.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("inject-field").join("config.toml"))
    }
}
