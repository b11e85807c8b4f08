//! GitHub branch source for jobxml
//!
//! Translates `github` entries of a Multibranch Pipeline's `branch-sources`
//! into the XML read by Jenkins' github-branch-source plugin:
//! - repository coordinates and credentials
//! - discovery behaviors (branches, origin and fork pull requests)
//! - wildcard name filters
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - `plugin` - The `github` branch source kind
//! - `config` - Parameter parsing
//! - `types` - Behavior and trust enums
//! - `schema` - Option tables and field specs
//! - `mapper` - Behavior to trait element mapping
//!
//! # Example Usage
//!
//! ```no_run
//! use jobxml_plugin_github::GitHubBranchSource;
//! use jobxml_plugin_api::ComponentRegistry;
//!
//! let mut registry = ComponentRegistry::new();
//! registry.register_branch_source(Box::new(GitHubBranchSource::new()));
//! ```

mod config;
mod mapper;
mod metadata;
mod plugin;
mod schema;
mod types;

pub use mapper::add_behavior;
pub use plugin::GitHubBranchSource;
pub use types::{
    Behavior,
    TrustPolicy,
};

// Register the branch source kind with the registry
jobxml_plugin_api::register_components!(branch_sources: [GitHubBranchSource]);
