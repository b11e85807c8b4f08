pub mod interpolation;
pub mod loader;
pub mod schema;

pub use interpolation::{
    interpolate,
    interpolate_yaml,
    InterpolationError,
};
pub use loader::{
    ConfigLoadError,
    ConfigLoadResult,
    ConfigLoader,
};
pub use schema::{
    JobxmlConfig,
    LoggingConfig,
    OutputConfig,
};
