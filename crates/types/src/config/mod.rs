// Path: crates/types/src/config/mod.rs

//! Configuration structures for the `pickled` operator node.
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Selects the formatter installed by the telemetry subscriber.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable, multi-line output.
    Pretty,
}

/// Configuration for a node home directory (`config.toml`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    /// File name of the redb database inside the home directory.
    #[serde(default = "default_db_file")]
    pub db_file: String,
    /// The log output format.
    #[serde(default)]
    pub log_format: LogFormat,
    /// The default log filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_db_file() -> String {
    "pickle.redb".to_string()
}
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            db_file: default_db_file(),
            log_format: LogFormat::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl NodeConfig {
    /// Parses and validates a configuration document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: NodeConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validates the configuration for semantic correctness.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.db_file.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "'db_file' must not be empty".to_string(),
            ));
        }
        if self.db_file.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(
                "'db_file' must be a file name, not a path".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = NodeConfig::from_toml_str("").unwrap();
        assert_eq!(config, NodeConfig::default());
        assert_eq!(config.db_file, "pickle.redb");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn default_config_survives_rendering() {
        let rendered = NodeConfig::default().to_toml_string().unwrap();
        let parsed = NodeConfig::from_toml_str(&rendered).unwrap();
        assert_eq!(parsed, NodeConfig::default());
    }

    #[test]
    fn rejects_paths_for_db_file() {
        let err = NodeConfig::from_toml_str("db_file = \"../x.redb\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = NodeConfig::from_toml_str("log_format = \"xml\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
