//! Parser configuration
//!
//! [`ParserConfig`] can be built in code or read from TOML:
//!
//! ```toml
//! argument_delimiters = [","]
//! require_close_paren = false
//! ```
//!
//! Missing keys fall back to their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tokenizer::DelimiterSet;

/// Errors that can occur when loading or saving a config
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read or written
    #[error("failed to access config {}: {source}", path.display())]
    Io {
        /// Path of the config file
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Config text is not valid TOML or has invalid values
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be rendered as TOML
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Settings for [`SignatureParser`](crate::signature::SignatureParser)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Characters separating arguments inside the parentheses
    #[serde(default = "default_argument_delimiters")]
    pub argument_delimiters: DelimiterSet,
    /// Reject method tokens whose argument list does not end with `)`
    ///
    /// Off by default: a missing `)` is tolerated and the rest of the method
    /// token is taken as the argument list.
    #[serde(default = "default_require_close_paren")]
    pub require_close_paren: bool,
}

fn default_argument_delimiters() -> DelimiterSet {
    DelimiterSet::from(',')
}

const fn default_require_close_paren() -> bool {
    false
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            argument_delimiters: default_argument_delimiters(),
            require_close_paren: default_require_close_paren(),
        }
    }
}

impl ParserConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("loaded parser config from {}", path.display());
        Ok(config)
    }

    /// Load a config from a TOML file, or the default config if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Render the config as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the config to a TOML file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml_string()?;
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        fs::write(path, content).map_err(io_err)
    }

    /// Set the argument delimiters
    #[must_use]
    pub fn with_argument_delimiters(mut self, delimiters: DelimiterSet) -> Self {
        self.argument_delimiters = delimiters;
        self
    }

    /// Set whether a closing `)` is required
    #[must_use]
    pub fn with_require_close_paren(mut self, require: bool) -> Self {
        self.require_close_paren = require;
        self
    }
}
