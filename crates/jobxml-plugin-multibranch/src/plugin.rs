//! Multibranch Pipeline project type and `branch-sources` module

use jobxml_plugin_api::*;

use crate::{
    mapper,
    metadata,
};

/// `project-type: multibranch-pipeline`
pub struct MultibranchPipeline {
    metadata: ComponentMetadata,
}

impl Default for MultibranchPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl MultibranchPipeline {
    pub fn new() -> Self {
        Self {
            metadata: metadata::create_project_metadata(),
        }
    }
}

impl ProjectType for MultibranchPipeline {
    fn metadata(&self) -> &ComponentMetadata {
        &self.metadata
    }

    fn root_xml(&self, job: &JobData) -> PluginResult<XmlElement> {
        mapper::build_root_element(job)
    }
}

/// Adds `<sources>` to Multibranch Pipeline projects
pub struct BranchSourcesModule {
    metadata: ComponentMetadata,
}

impl Default for BranchSourcesModule {
    fn default() -> Self {
        Self::new()
    }
}

impl BranchSourcesModule {
    pub const SEQUENCE: u32 = 85;

    pub fn new() -> Self {
        Self {
            metadata: metadata::create_module_metadata(),
        }
    }
}

impl Module for BranchSourcesModule {
    fn metadata(&self) -> &ComponentMetadata {
        &self.metadata
    }

    fn sequence(&self) -> u32 {
        Self::SEQUENCE
    }

    fn gen_xml(
        &self, registry: &ComponentRegistry, root: &XmlElement, job: &JobData,
    ) -> PluginResult<Vec<XmlElement>> {
        Ok(mapper::build_branch_sources(registry, root, job)?
            .into_iter()
            .collect())
    }
}
