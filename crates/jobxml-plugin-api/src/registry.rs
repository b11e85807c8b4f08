use std::collections::HashMap;

use crate::error::{
    PluginError,
    PluginResult,
};
use crate::plugin::{
    BranchSourceKind,
    Module,
    ProjectType,
};
use crate::schema::ComponentMetadata;

pub const PROJECT_TYPE: &str = "project-type";

pub const BRANCH_SOURCE: &str = "branch-source";

/// Component registry - dispatches job sections to builders by name
pub struct ComponentRegistry {
    project_types: HashMap<String, Box<dyn ProjectType>>,
    modules: Vec<Box<dyn Module>>,
    branch_sources: HashMap<String, Box<dyn BranchSourceKind>>,
}

impl ComponentRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            project_types: HashMap::new(),
            modules: Vec::new(),
            branch_sources: HashMap::new(),
        }
    }

    /// Register a project type, replacing one with the same name
    pub fn register_project_type(&mut self, project_type: Box<dyn ProjectType>) {
        let name = project_type.name().to_string();
        tracing::trace!(name = %name, "registered project type");
        self.project_types.insert(name, project_type);
    }

    /// Register a module, keeping modules ordered by sequence
    pub fn register_module(&mut self, module: Box<dyn Module>) {
        tracing::trace!(name = %module.name(), sequence = module.sequence(), "registered module");
        self.modules.push(module);
        self.modules.sort_by_key(|m| m.sequence());
    }

    /// Register a branch source kind, replacing one with the same name
    pub fn register_branch_source(&mut self, kind: Box<dyn BranchSourceKind>) {
        let name = kind.name().to_string();
        tracing::trace!(name = %name, "registered branch source");
        self.branch_sources.insert(name, kind);
    }

    /// Get a project type, failing with the registered names
    pub fn project_type(&self, name: &str) -> PluginResult<&dyn ProjectType> {
        self.project_types
            .get(name)
            .map(|p| p.as_ref())
            .ok_or_else(|| PluginError::UnknownComponent {
                component_type: PROJECT_TYPE.to_string(),
                name: name.to_string(),
                valid: self.project_type_names(),
            })
    }

    /// Get a branch source kind, failing with the registered names
    pub fn branch_source(&self, name: &str) -> PluginResult<&dyn BranchSourceKind> {
        self.branch_sources
            .get(name)
            .map(|k| k.as_ref())
            .ok_or_else(|| PluginError::UnknownComponent {
                component_type: BRANCH_SOURCE.to_string(),
                name: name.to_string(),
                valid: self.branch_source_names(),
            })
    }

    /// Modules in execution order
    pub fn modules(&self) -> impl Iterator<Item = &dyn Module> {
        self.modules.iter().map(|m| m.as_ref())
    }

    pub fn project_type_names(&self) -> Vec<String> {
        sorted_keys(&self.project_types)
    }

    pub fn branch_source_names(&self) -> Vec<String> {
        sorted_keys(&self.branch_sources)
    }

    /// Metadata for every registered component, grouped by family
    pub fn all_metadata(&self) -> Vec<ComponentMetadata> {
        let mut project_types: Vec<_> =
            self.project_types.values().map(|p| p.metadata().clone()).collect();
        project_types.sort_by(|a, b| a.name.cmp(&b.name));

        let mut branch_sources: Vec<_> =
            self.branch_sources.values().map(|k| k.metadata().clone()).collect();
        branch_sources.sort_by(|a, b| a.name.cmp(&b.name));

        project_types
            .into_iter()
            .chain(self.modules.iter().map(|m| m.metadata().clone()))
            .chain(branch_sources)
            .collect()
    }

    /// Get count of registered components
    pub fn count(&self) -> usize {
        self.project_types.len() + self.modules.len() + self.branch_sources.len()
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted_keys<V>(map: &HashMap<String, V>) -> Vec<String> {
    let mut keys: Vec<String> = map.keys().cloned().collect();
    keys.sort();
    keys
}
