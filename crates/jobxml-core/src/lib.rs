//! Job loading and XML generation for jobxml
//!
//! Job files are read by [`JobLoader`], turned into element trees by the
//! components registered in [`plugins::create_component_registry`], and
//! rendered by [`XmlGenerator`].

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod plugins;

pub use application::XmlGenerator;
pub use domain::{
    DomainError,
    DomainResult,
    GeneratedJob,
    JobDefinition,
};
pub use infrastructure::{
    ConfigLoadError,
    ConfigLoader,
    JobLoader,
    JobxmlConfig,
};
pub use plugins::{
    create_component_registry,
    get_all_component_metadata,
};
