use std::path::PathBuf;

use jobxml_plugin_api::types::get_str;
use jobxml_plugin_api::{
    JobData,
    PluginResult,
};

/// Project type assumed when a job omits `project-type`
pub const DEFAULT_PROJECT_TYPE: &str = "freestyle";

/// One `- job:` entry of a job file
#[derive(Debug, Clone)]
pub struct JobDefinition {
    pub name: String,
    /// File the job was loaded from
    pub source: PathBuf,
    pub data: JobData,
}

impl JobDefinition {
    pub fn project_type(&self) -> PluginResult<String> {
        Ok(get_str(&self.data, "project-type")?.unwrap_or_else(|| DEFAULT_PROJECT_TYPE.to_string()))
    }
}

/// Rendered XML for one job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedJob {
    pub name: String,
    pub xml: String,
}

impl GeneratedJob {
    /// File name used when writing jobs to an output directory
    pub fn file_name(&self) -> String {
        format!("{}.xml", self.name.replace('/', "_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(src: &str) -> JobDefinition {
        JobDefinition {
            name: "demo".to_string(),
            source: PathBuf::from("jobs.yaml"),
            data: serde_yaml::from_str(src).unwrap(),
        }
    }

    #[test]
    fn test_project_type_default() {
        assert_eq!(job("name: demo").project_type().unwrap(), "freestyle");
        assert_eq!(
            job("project-type: multibranch-pipeline").project_type().unwrap(),
            "multibranch-pipeline"
        );
    }

    #[test]
    fn test_file_name_flattens_folders() {
        let generated = GeneratedJob {
            name: "team/service".to_string(),
            xml: String::new(),
        };
        assert_eq!(generated.file_name(), "team_service.xml");
    }
}
