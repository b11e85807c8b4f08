use std::path::PathBuf;

use jobxml_plugin_api::RenderOptions;
use serde::{
    Deserialize,
    Serialize,
};

pub(super) const DEFAULT_INDENT: usize = 2;

pub(super) const DEFAULT_XML_DECLARATION: bool = true;

pub(super) const DEFAULT_LOG_FILTER: &str = crate::logging::DEFAULT_LOG_FILTER;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct JobxmlConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl JobxmlConfig {
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join("jobxml"))
            .unwrap_or_else(|| PathBuf::from(".jobxml"))
    }

    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            indent: self.output.indent,
            xml_declaration: self.output.xml_declaration,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Spaces per nesting level, 0 for single-line documents
    #[serde(default = "default_indent")]
    pub indent: usize,

    #[serde(default = "default_xml_declaration")]
    pub xml_declaration: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            xml_declaration: default_xml_declaration(),
        }
    }
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

fn default_xml_declaration() -> bool {
    DEFAULT_XML_DECLARATION
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = JobxmlConfig::default();
        assert_eq!(config.output.indent, 2);
        assert!(config.output.xml_declaration);
        assert_eq!(config.logging.filter, "jobxml=info,jobxml_core=info");
    }

    #[test]
    fn test_render_options() {
        let mut config = JobxmlConfig::default();
        config.output.indent = 0;
        config.output.xml_declaration = false;

        let options = config.render_options();
        assert_eq!(options.indent, 0);
        assert!(!options.xml_declaration);
    }
}
