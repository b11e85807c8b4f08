//! Multibranch Pipeline support for jobxml
//!
//! This crate provides the `multibranch-pipeline` project type and the
//! `branch-sources` module that fills it:
//! - project skeleton with the workflow branch-project factory
//! - one `BranchSource` per configured source, dispatched by kind
//! - branch property strategies
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - `plugin` - Project type and module implementations
//! - `mapper` - Element builders
//! - `types` - Branch property enum
//! - `schema` - Jenkins class names
//! - `config` - Job parameter parsing
//!
//! # Example Usage
//!
//! ```no_run
//! use jobxml_plugin_api::ComponentRegistry;
//!
//! let mut registry = ComponentRegistry::new();
//! jobxml_plugin_multibranch::register(&mut registry);
//! ```

mod config;
mod mapper;
mod metadata;
mod plugin;
mod schema;
mod types;

pub use mapper::{
    build_property_strategy,
    build_root_element,
};
pub use plugin::{
    BranchSourcesModule,
    MultibranchPipeline,
};
pub use schema::PROJECT_CLASS;
pub use types::BranchProperty;

// Register the project type and module with the registry
jobxml_plugin_api::register_components!(
    project_types: [MultibranchPipeline],
    modules: [BranchSourcesModule],
);
