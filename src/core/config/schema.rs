//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Example
//!
//! ```toml
//! [paths]
//! expand_tilde = true
//!
//! [log]
//! filter = "gitbind=debug"
//! ```
//!
//! # Validation
//!
//! Unknown keys are rejected at parse time. Values are validated after
//! parsing (e.g., a log filter must not be empty).

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Path normalization settings
    pub paths: Option<PathsConfig>,

    /// Logging settings
    pub log: Option<LogConfig>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(log) = &self.log {
            log.validate()?;
        }
        Ok(())
    }
}

/// `[paths]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Expand a leading `~` before resolving relative repository paths
    pub expand_tilde: Option<bool>,
}

/// `[log]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// tracing `EnvFilter` directive, e.g. `"warn"` or `"gitbind=debug"`
    pub filter: Option<String>,
}

impl LogConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(filter) = &self.filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "log.filter cannot be empty".into(),
                ));
            }
        }
        Ok(())
    }
}
