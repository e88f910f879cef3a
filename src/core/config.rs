//! Configuration keys and lookup for the diagnostics layer
//!
//! Configuration sources are external; this module only defines the typed
//! keys the diagnostics layer reads and a small in-memory source.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// A named configuration entry holding a value of type `T`
pub struct ConfigurationKey<T> {
    name: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T> ConfigurationKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _value: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: DeserializeOwned> ConfigurationKey<T> {
    /// Read this key from `configuration`. `Ok(None)` when the key is not set.
    pub fn read(&self, configuration: &dyn Configuration) -> Result<Option<T>> {
        match configuration.raw_value(self.name) {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| LoggerError::config(self.name, e.to_string())),
            None => Ok(None),
        }
    }
}

impl<T> fmt::Debug for ConfigurationKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConfigurationKey").field(&self.name).finish()
    }
}

impl<T> Clone for ConfigurationKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ConfigurationKey<T> {}

/// The keys used by the diagnostics layer
pub struct DiagnosticsConfigurationKeys;

impl DiagnosticsConfigurationKeys {
    /// Threshold used to seed loggers that are created from configuration
    pub const DEFAULT_LOG_LEVEL: ConfigurationKey<LogLevel> =
        ConfigurationKey::new("DefaultLogLevel");

    /// Names of all diagnostics keys
    pub fn to_collection() -> Vec<&'static str> {
        vec![Self::DEFAULT_LOG_LEVEL.name()]
    }
}

/// Source of configuration values
pub trait Configuration: Send + Sync {
    fn has_value_for(&self, name: &str) -> bool;

    /// The raw value stored under `name`
    fn raw_value(&self, name: &str) -> Option<serde_json::Value>;
}

/// In-memory configuration backed by JSON values
#[derive(Debug, Clone, Default)]
pub struct MapConfiguration {
    values: HashMap<String, serde_json::Value>,
}

impl MapConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under the key's name
    pub fn with_value<T: Serialize>(mut self, key: &ConfigurationKey<T>, value: T) -> Result<Self> {
        self.values
            .insert(key.name().to_string(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Build from a JSON object, e.g. `{"DefaultLogLevel": "DEBUG"}`
    pub fn from_json(json: &str) -> Result<Self> {
        let values: HashMap<String, serde_json::Value> = serde_json::from_str(json)?;
        Ok(Self { values })
    }
}

impl Configuration for MapConfiguration {
    fn has_value_for(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    fn raw_value(&self, name: &str) -> Option<serde_json::Value> {
        self.values.get(name).cloned()
    }
}

/// Resolved diagnostics settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DiagnosticsConfig {
    #[serde(default)]
    pub default_log_level: LogLevel,
}

impl DiagnosticsConfig {
    /// Resolve settings, falling back to defaults for missing keys
    pub fn from_configuration(configuration: &dyn Configuration) -> Result<Self> {
        let default_log_level = DiagnosticsConfigurationKeys::DEFAULT_LOG_LEVEL
            .read(configuration)?
            .unwrap_or_default();

        Ok(Self { default_log_level })
    }
}
