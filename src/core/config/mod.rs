//! core::config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! Searched in order, first existing file wins:
//! 1. An explicit path (the CLI's `--config`)
//! 2. `$GITBIND_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/gitbind/config.toml`
//! 4. `~/.gitbind/config.toml`
//!
//! A missing file is not an error; defaults are used.
//!
//! # Example
//!
//! ```no_run
//! use gitbind::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! println!("expand ~: {}", config.expand_tilde());
//! ```

pub mod schema;

pub use schema::{FileConfig, LogConfig, PathsConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration with defaults applied through accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents
    pub file: FileConfig,
    /// Path the configuration was loaded from (if any)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from `explicit` or the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing, or if any found file
    /// cannot be parsed or fails validation.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::find_default() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from exactly `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&contents, path)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        Ok(Self {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    /// First existing config file among the default locations.
    fn find_default() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("GITBIND_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("gitbind/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        dirs::home_dir()
            .map(|home| home.join(".gitbind/config.toml"))
            .filter(|path| path.exists())
    }

    /// Path of the loaded file, `None` when running on defaults.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Whether `~` is expanded in repository paths.
    ///
    /// Defaults to `true` if not configured.
    pub fn expand_tilde(&self) -> bool {
        self.file
            .paths
            .as_ref()
            .and_then(|p| p.expand_tilde)
            .unwrap_or(true)
    }

    /// Configured log filter, if any.
    pub fn log_filter(&self) -> Option<&str> {
        self.file.log.as_ref().and_then(|l| l.filter.as_deref())
    }
}
