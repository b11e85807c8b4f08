use thiserror::Error;

/// Component error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PluginError {
    #[error("{0}")]
    WrongProjectType(String),

    #[error("Missing required field: {0}")]
    MissingRequired(String),

    #[error("Invalid value '{value}' for '{field}', valid options: {}", valid.join(", "))]
    InvalidOption {
        field: String,
        value: String,
        valid: Vec<String>,
    },

    #[error("Unknown {component_type} '{name}', registered: {}", valid.join(", "))]
    UnknownComponent {
        component_type: String,
        name: String,
        valid: Vec<String>,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PluginError {
    pub fn invalid_option<I, S>(field: &str, value: &str, valid: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PluginError::InvalidOption {
            field: field.to_string(),
            value: value.to_string(),
            valid: valid.into_iter().map(Into::into).collect(),
        }
    }
}

pub type PluginResult<T> = Result<T, PluginError>;

// Conversion from quick-xml writer errors
impl From<quick_xml::Error> for PluginError {
    fn from(err: quick_xml::Error) -> Self {
        PluginError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for PluginError {
    fn from(err: std::io::Error) -> Self {
        PluginError::Serialization(err.to_string())
    }
}
