//! Reads `- job:` entries out of YAML job files

use std::path::{
    Path,
    PathBuf,
};

use indexmap::IndexMap;
use jobxml_plugin_api::types::get_str;
use serde_yaml::Value;

use super::config::interpolate_yaml;
use crate::domain::{
    validate_job_name,
    DomainError,
    DomainResult,
    JobDefinition,
};

const JOB_KEY: &str = "job";

const JOB_FILE_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Collects job definitions from files and directories, keeping load order
///
/// String values go through `${VAR}` interpolation, so a value that must
/// reach Jenkins as a literal `${...}` is written `$${...}`.
#[derive(Debug, Default)]
pub struct JobLoader {
    jobs: IndexMap<String, JobDefinition>,
}

impl JobLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_paths<P: AsRef<Path>>(&mut self, paths: &[P]) -> DomainResult<()> {
        for path in paths {
            self.load_path(path.as_ref())?;
        }
        Ok(())
    }

    /// Loads a single file, or every job file directly inside a directory
    pub fn load_path(&mut self, path: &Path) -> DomainResult<()> {
        if !path.is_dir() {
            return self.load_file(path);
        }

        let files = Self::discover_job_files(path)?;
        if files.is_empty() {
            return Err(DomainError::NoJobFiles(path.to_path_buf()));
        }

        for file in files {
            self.load_file(&file)?;
        }
        Ok(())
    }

    pub fn load_file(&mut self, path: &Path) -> DomainResult<()> {
        let content = std::fs::read_to_string(path).map_err(|source| DomainError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let before = self.jobs.len();
        self.parse_str(&content, path)?;

        tracing::debug!(
            path = %path.display(),
            jobs = self.jobs.len() - before,
            "Loaded job file"
        );
        Ok(())
    }

    /// Parses one job file's content; `source` is only used for messages
    pub fn parse_str(&mut self, content: &str, source: &Path) -> DomainResult<()> {
        let mut document: Value =
            serde_yaml::from_str(content).map_err(|e| DomainError::Yaml {
                path: source.to_path_buf(),
                source: e,
            })?;

        interpolate_yaml(&mut document).map_err(|e| DomainError::Interpolation {
            path: source.to_path_buf(),
            source: e,
        })?;

        let entries = match document {
            Value::Null => {
                tracing::warn!(path = %source.display(), "Job file is empty");
                return Ok(());
            }
            Value::Sequence(entries) => entries,
            _ => {
                return Err(invalid(source, "top level must be a list of `- job:` entries"));
            }
        };

        for entry in entries {
            let Value::Mapping(entry) = entry else {
                return Err(invalid(source, "each list entry must be a mapping"));
            };

            for (key, value) in entry {
                match key.as_str() {
                    Some(JOB_KEY) => self.add_job(value, source)?,
                    Some(other) => {
                        tracing::warn!(
                            path = %source.display(),
                            key = other,
                            "Skipping unsupported top-level entry"
                        );
                    }
                    None => return Err(invalid(source, "entry keys must be strings")),
                }
            }
        }

        Ok(())
    }

    fn add_job(&mut self, value: Value, source: &Path) -> DomainResult<()> {
        let Value::Mapping(data) = value else {
            return Err(invalid(source, "a job must be a mapping"));
        };

        let name = get_str(&data, "name")
            .map_err(|e| invalid(source, &e.to_string()))?
            .ok_or_else(|| invalid(source, "a job is missing required field 'name'"))?;

        validate_job_name(&name, source)?;

        if let Some(existing) = self.jobs.get(&name) {
            return Err(DomainError::DuplicateJob {
                name,
                first: existing.source.clone(),
                second: source.to_path_buf(),
            });
        }

        tracing::trace!(job = %name, "Parsed job");
        self.jobs.insert(
            name.clone(),
            JobDefinition {
                name,
                source: source.to_path_buf(),
                data,
            },
        );
        Ok(())
    }

    fn discover_job_files(dir: &Path) -> DomainResult<Vec<PathBuf>> {
        let escaped = glob::Pattern::escape(&dir.to_string_lossy());
        let mut files = Vec::new();

        for extension in JOB_FILE_EXTENSIONS {
            let pattern = format!("{}/*.{}", escaped, extension);
            let entries = glob::glob(&pattern).map_err(|e| DomainError::InvalidJob {
                path: dir.to_path_buf(),
                message: format!("bad search pattern: {}", e),
            })?;

            for entry in entries {
                let path = entry.map_err(|e| DomainError::Io {
                    path: e.path().to_path_buf(),
                    source: e.into_error(),
                })?;
                if path.is_file() {
                    files.push(path);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn jobs(&self) -> impl Iterator<Item = &JobDefinition> {
        self.jobs.values()
    }

    pub fn into_jobs(self) -> Vec<JobDefinition> {
        self.jobs.into_values().collect()
    }
}

fn invalid(path: &Path, message: &str) -> DomainError {
    DomainError::InvalidJob {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}
