pub mod config;
pub mod job_loader;

pub use config::{
    ConfigLoadError,
    ConfigLoader,
    JobxmlConfig,
};
pub use job_loader::JobLoader;
