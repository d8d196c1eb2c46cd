//! Configuration for a conversion run.
//!
//! The image locator normally comes from the process environment under
//! [`DEFAULT_LOCATOR_KEY`]. An explicit locator, when set, takes precedence
//! and the environment is not consulted.

use std::collections::HashMap;
use std::env::{self, VarError};

use thiserror::Error;

use crate::csv::DEFAULT_TERMINATOR;
use crate::decode::Locator;

/// Environment variable holding the image locator by default.
pub const DEFAULT_LOCATOR_KEY: &str = "ENV_I_PNG_FILENAME";

/// Errors raised while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The required setting is absent.
    #[error("configuration missing: {key} is not set")]
    Missing { key: String },

    /// The setting exists but is not valid unicode.
    #[error("configuration missing: {key} is not valid unicode")]
    NotUnicode { key: String },
}

/// Key/value lookup for configuration settings.
pub trait ConfigLookup {
    /// Value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the key is absent.
    fn get(&self, key: &str) -> Result<String, ConfigError>;
}

/// Reads settings from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvLookup;

impl ConfigLookup for EnvLookup {
    fn get(&self, key: &str) -> Result<String, ConfigError> {
        env::var(key).map_err(|e| match e {
            VarError::NotPresent => ConfigError::Missing {
                key: key.to_string(),
            },
            VarError::NotUnicode(_) => ConfigError::NotUnicode {
                key: key.to_string(),
            },
        })
    }
}

impl ConfigLookup for HashMap<String, String> {
    fn get(&self, key: &str) -> Result<String, ConfigError> {
        HashMap::get(self, key)
            .cloned()
            .ok_or_else(|| ConfigError::Missing {
                key: key.to_string(),
            })
    }
}

/// Settings for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name of the setting that holds the image locator.
    pub locator_key: String,
    /// Explicit locator; bypasses the lookup when set.
    pub locator: Option<String>,
    /// Terminator written after every CSV line.
    pub line_terminator: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locator_key: DEFAULT_LOCATOR_KEY.to_string(),
            locator: None,
            line_terminator: DEFAULT_TERMINATOR.to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the image locator, preferring the explicit one.
    pub fn resolve_locator<L: ConfigLookup + ?Sized>(
        &self,
        lookup: &L,
    ) -> Result<Locator, ConfigError> {
        match &self.locator {
            Some(explicit) => Ok(Locator::new(explicit.clone())),
            None => lookup.get(&self.locator_key).map(Locator::new),
        }
    }
}
