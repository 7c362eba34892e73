//! CLI configuration loading and merging.

use anyhow::{Context, Result};
use rencana_core::constants::DEFAULT_MODEL;
use rencana_core::{ArtifactStore, DocumentRenderer, LessonPlanner, PlannerConfig};
use rencana_models::{ModelConfig, ModelFactory, ModelType};
use std::path::PathBuf;

const DEFAULT_OUTPUT_DIR: &str = "rencana-output";

/// Load and merge configuration files and environment.
///
/// Configuration precedence:
/// 1. CLI arguments (applied in `resolve`)
/// 2. Environment variables
/// 3. Local config file (./.rencanarc)
/// 4. Global config file (~/.rencana/config.toml)
/// 5. Defaults
pub fn load_config() -> Result<PlannerConfig> {
    let mut config = PlannerConfig::discover_and_load().context("Failed to load configuration")?;
    config.apply_env();
    Ok(config)
}

/// Values given on the command line.
#[derive(Debug, Default)]
pub struct Overrides {
    pub engine: Option<String>,
    pub model: Option<String>,
    pub output: Option<PathBuf>,
}

/// Fully resolved settings for a command.
#[derive(Debug, Clone)]
pub struct Settings {
    pub engine: ModelType,
    pub model: String,
    pub output_dir: PathBuf,
    pub temperature: Option<f32>,
}

impl Settings {
    pub fn store(&self) -> ArtifactStore {
        ArtifactStore::new(self.output_dir.clone())
    }

    pub fn planner(&self) -> Result<LessonPlanner> {
        let model = ModelFactory::create(ModelConfig::new(self.engine, self.model.clone()))
            .with_context(|| format!("Failed to create {} model '{}'", self.engine, self.model))?;
        Ok(LessonPlanner::new(model).with_temperature(self.temperature))
    }

    pub fn renderer(&self) -> Result<DocumentRenderer> {
        DocumentRenderer::new().context("Failed to compile document templates")
    }
}

/// Applies command-line overrides on top of the loaded configuration.
pub fn resolve(config: PlannerConfig, overrides: Overrides) -> Result<Settings> {
    let engine_name = overrides.engine.or(config.engine).unwrap_or_else(|| ModelType::Gemini.to_string());
    let engine: ModelType = engine_name.parse()?;

    let model = overrides.model.or(config.model).unwrap_or_else(|| match engine {
        ModelType::Gemini => DEFAULT_MODEL.to_string(),
        ModelType::Mock => "mock".to_string(),
    });

    let output_dir = overrides
        .output
        .or_else(|| config.output_dir.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    Ok(Settings { engine, model, output_dir, temperature: config.temperature })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let config = PlannerConfig {
            engine: Some("gemini".to_string()),
            model: Some("gemini-2.5-flash".to_string()),
            output_dir: Some("from-config".to_string()),
            ..Default::default()
        };
        let settings = resolve(
            config,
            Overrides { engine: Some("mock".to_string()), output: Some(PathBuf::from("flag")), ..Default::default() },
        )
        .unwrap();

        assert_eq!(settings.engine, ModelType::Mock);
        assert_eq!(settings.model, "gemini-2.5-flash");
        assert_eq!(settings.output_dir, PathBuf::from("flag"));
    }

    #[test]
    fn test_defaults() {
        let settings = resolve(PlannerConfig::default(), Overrides::default()).unwrap();
        assert_eq!(settings.engine, ModelType::Gemini);
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn test_unknown_engine_rejected() {
        let result = resolve(PlannerConfig::default(), Overrides { engine: Some("gpt".to_string()), ..Default::default() });
        assert!(result.is_err());
    }
}
