use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

use super::interpolation::{
    interpolate_toml,
    InterpolationError,
};
use super::schema::JobxmlConfig;

/// Deeper indentation than this is almost certainly a typo
const MAX_INDENT: usize = 16;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Environment variable interpolation failed: {0}")]
    InterpolationError(#[from] InterpolationError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type ConfigLoadResult<T> = Result<T, ConfigLoadError>;

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn discover_config_path() -> PathBuf {
        if let Ok(path) = std::env::var("JOBXML_CONFIG_PATH") {
            tracing::debug!("Using config path from JOBXML_CONFIG_PATH: {}", path);
            return PathBuf::from(path);
        }

        let path = JobxmlConfig::default_config_path();
        tracing::debug!("Using default config path: {}", path.display());
        path
    }

    /// Loads the discovered settings file, or built-in defaults when it does not exist
    pub fn load_default() -> ConfigLoadResult<JobxmlConfig> {
        let path = Self::discover_config_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(JobxmlConfig::default());
        }
        Self::load(&path)
    }

    pub fn load(path: &Path) -> ConfigLoadResult<JobxmlConfig> {
        if !path.exists() {
            return Err(ConfigLoadError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> ConfigLoadResult<JobxmlConfig> {
        let mut value: toml::Value = toml::from_str(content)?;

        interpolate_toml(&mut value)?;

        let config: JobxmlConfig = value.try_into().map_err(|e| {
            ConfigLoadError::InvalidConfig(format!("Failed to deserialize config: {}", e))
        })?;

        Self::validate(&config)?;

        tracing::debug!(
            indent = config.output.indent,
            xml_declaration = config.output.xml_declaration,
            "Loaded config"
        );

        Ok(config)
    }

    fn validate(config: &JobxmlConfig) -> ConfigLoadResult<()> {
        if config.output.indent > MAX_INDENT {
            return Err(ConfigLoadError::InvalidConfig(format!(
                "output.indent must be at most {}, got {}",
                MAX_INDENT, config.output.indent
            )));
        }

        if config.logging.filter.trim().is_empty() {
            return Err(ConfigLoadError::InvalidConfig(
                "logging.filter must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
