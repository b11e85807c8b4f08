use jobxml_plugin_api::{
    ComponentMetadata,
    ComponentRegistry,
};

/// Registry holding every built-in project type, module and branch-source kind
pub fn create_component_registry() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();

    jobxml_plugin_multibranch::register(&mut registry);
    jobxml_plugin_github::register(&mut registry);

    tracing::debug!(components = registry.count(), "Component registry ready");
    registry
}

pub fn get_all_component_metadata() -> Vec<ComponentMetadata> {
    create_component_registry().all_metadata()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_components() {
        let registry = create_component_registry();

        assert_eq!(registry.project_type_names(), vec!["multibranch-pipeline"]);
        assert_eq!(registry.branch_source_names(), vec!["github"]);
        let modules: Vec<_> = registry.modules().map(|m| m.name().to_string()).collect();
        assert_eq!(modules, vec!["branch-sources"]);
    }

    #[test]
    fn test_metadata_lists_every_component() {
        let names: Vec<_> = get_all_component_metadata()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names.len(), 3);
        assert!(names.contains(&"github".to_string()));
    }
}
