//! Configuration file support.
//!
//! Settings come from, in increasing precedence: built-in defaults, the
//! global file (`~/.rencana/config.toml`), the local file (`./.rencanarc`),
//! and the `RENCANA_*` environment variables. Command-line flags are applied
//! last by the binary.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ENGINE_ENV: &str = "RENCANA_ENGINE";
pub const MODEL_ENV: &str = "RENCANA_MODEL";
pub const OUTPUT_ENV: &str = "RENCANA_OUTPUT";

/// Planner configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlannerConfig {
    /// Model provider (`gemini` or `mock`).
    #[serde(default)]
    pub engine: Option<String>,

    /// Model id passed to the provider.
    #[serde(default)]
    pub model: Option<String>,

    /// Directory for stage artifacts and exported documents.
    #[serde(default)]
    pub output_dir: Option<String>,

    /// Log level filter, e.g. `info` or `rencana_core=debug`.
    #[serde(default)]
    pub log_level: Option<String>,

    /// Sampling temperature, 0.0 to 2.0.
    #[serde(default)]
    pub temperature: Option<f32>,
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    /// Failed to read or write a configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(String),

    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl PlannerConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values no provider accepts.
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(t) = self.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(ConfigError::InvalidValue(format!("temperature {t} is outside 0.0..=2.0")));
            }
        }
        Ok(())
    }

    /// `~/.rencana/config.toml`.
    pub fn default_global_path() -> PathBuf {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".rencana")
            .join("config.toml")
    }

    /// `./.rencanarc`.
    pub fn default_local_path() -> PathBuf {
        PathBuf::from(".rencanarc")
    }

    /// Loads the global then the local file; local values win.
    ///
    /// Missing files are skipped. A file that exists but does not parse is an error.
    pub fn discover_and_load() -> ConfigResult<Self> {
        Self::load_layers(&[Self::default_global_path(), Self::default_local_path()])
    }

    /// Merges the given files in order, skipping missing ones.
    pub fn load_layers(paths: &[PathBuf]) -> ConfigResult<Self> {
        let mut config = Self::default();
        for path in paths {
            match Self::load_from_file(path) {
                Ok(layer) => config.merge(&layer),
                Err(ConfigError::NotFound(_)) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(config)
    }

    /// Merge another configuration into this one.
    ///
    /// Values from `other` override values in `self` if they are Some.
    pub fn merge(&mut self, other: &Self) {
        if let Some(ref engine) = other.engine {
            self.engine = Some(engine.clone());
        }
        if let Some(ref model) = other.model {
            self.model = Some(model.clone());
        }
        if let Some(ref output_dir) = other.output_dir {
            self.output_dir = Some(output_dir.clone());
        }
        if let Some(ref log_level) = other.log_level {
            self.log_level = Some(log_level.clone());
        }
        if other.temperature.is_some() {
            self.temperature = other.temperature;
        }
    }

    /// Overrides file values with `RENCANA_ENGINE`, `RENCANA_MODEL` and `RENCANA_OUTPUT`.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(engine) = non_empty(ENGINE_ENV) {
            self.engine = Some(engine);
        }
        if let Some(model) = non_empty(MODEL_ENV) {
            self.model = Some(model);
        }
        if let Some(output_dir) = non_empty(OUTPUT_ENV) {
            self.output_dir = Some(output_dir);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config_content = r#"
engine = "gemini"
model = "gemini-2.5-flash"
output_dir = "rencana-out"
log_level = "debug"
temperature = 0.4
"#;

        std::fs::write(&config_path, config_content).unwrap();

        let config = PlannerConfig::load_from_file(&config_path).unwrap();
        assert_eq!(config.engine, Some("gemini".to_string()));
        assert_eq!(config.model, Some("gemini-2.5-flash".to_string()));
        assert_eq!(config.output_dir, Some("rencana-out".to_string()));
        assert_eq!(config.log_level, Some("debug".to_string()));
        assert_eq!(config.temperature, Some(0.4));
    }

    #[test]
    fn test_invalid_temperature_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "temperature = 3.5\n").unwrap();

        let err = PlannerConfig::load_from_file(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_layers_merge_local_over_global() {
        let temp_dir = TempDir::new().unwrap();
        let global = temp_dir.path().join("global.toml");
        let local = temp_dir.path().join(".rencanarc");
        std::fs::write(&global, "engine = \"gemini\"\nmodel = \"gemini-2.5-pro\"\n").unwrap();
        std::fs::write(&local, "engine = \"mock\"\n").unwrap();

        let config =
            PlannerConfig::load_layers(&[global, local, temp_dir.path().join("missing.toml")]).unwrap();
        assert_eq!(config.engine, Some("mock".to_string()));
        assert_eq!(config.model, Some("gemini-2.5-pro".to_string()));
    }

    #[test]
    fn test_broken_layer_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let broken = temp_dir.path().join(".rencanarc");
        std::fs::write(&broken, "engine = ").unwrap();
        assert!(matches!(PlannerConfig::load_layers(&[broken]), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_env_overrides_files() {
        let mut config = PlannerConfig { engine: Some("gemini".to_string()), ..Default::default() };
        config.apply_env_from(|key| match key {
            ENGINE_ENV => Some("mock".to_string()),
            MODEL_ENV => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.engine, Some("mock".to_string()));
        assert_eq!(config.model, None);
    }
}
