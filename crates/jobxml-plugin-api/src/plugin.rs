use serde_yaml::Mapping;

use crate::error::PluginResult;
use crate::registry::ComponentRegistry;
use crate::schema::ComponentMetadata;
use crate::types::JobData;
use crate::xml::XmlElement;

/// Builds the root element for a `project-type`
pub trait ProjectType: Send + Sync {
    /// Get component metadata
    fn metadata(&self) -> &ComponentMetadata;

    /// Create the project skeleton for one job
    fn root_xml(&self, job: &JobData) -> PluginResult<XmlElement>;

    /// Get the `project-type` value this builder answers to
    fn name(&self) -> &str {
        &self.metadata().name
    }
}

/// A job section translator run against every job after the root exists
pub trait Module: Send + Sync {
    fn metadata(&self) -> &ComponentMetadata;

    /// Modules run in ascending sequence
    fn sequence(&self) -> u32;

    /// Produce the children to append to `root`
    ///
    /// `root` is read-only here; the caller attaches the returned elements
    /// only when every module of the job has succeeded.
    fn gen_xml(
        &self, registry: &ComponentRegistry, root: &XmlElement, job: &JobData,
    ) -> PluginResult<Vec<XmlElement>>;

    fn name(&self) -> &str {
        &self.metadata().name
    }
}

/// Builds the `<source>` element of one `branch-sources` entry
pub trait BranchSourceKind: Send + Sync {
    fn metadata(&self) -> &ComponentMetadata;

    fn build_source(&self, params: &Mapping) -> PluginResult<XmlElement>;

    fn name(&self) -> &str {
        &self.metadata().name
    }
}
