use std::path::PathBuf;

use jobxml_plugin_api::PluginError;
use thiserror::Error;

use crate::infrastructure::config::{
    ConfigLoadError,
    InterpolationError,
};

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Job '{job}': {source}")]
    Generation {
        job: String,
        #[source]
        source: PluginError,
    },

    #[error("Invalid job definition in {path}: {message}")]
    InvalidJob { path: PathBuf, message: String },

    #[error("Duplicate job name '{name}' (first defined in {first}, again in {second})")]
    DuplicateJob {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to interpolate {path}: {source}")]
    Interpolation {
        path: PathBuf,
        #[source]
        source: InterpolationError,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),

    #[error("No job files found in {0}")]
    NoJobFiles(PathBuf),
}

impl DomainError {
    pub fn generation(job: &str, source: PluginError) -> Self {
        DomainError::Generation {
            job: job.to_string(),
            source,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
