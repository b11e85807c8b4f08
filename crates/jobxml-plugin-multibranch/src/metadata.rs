use jobxml_plugin_api::registry::PROJECT_TYPE;
use jobxml_plugin_api::ComponentMetadata;

pub fn create_project_metadata() -> ComponentMetadata {
    ComponentMetadata {
        component_type: PROJECT_TYPE.to_string(),
        name: "multibranch-pipeline".to_string(),
        description: "Multibranch Pipeline project running a Jenkinsfile per branch".to_string(),
        fields: vec!["script-path".to_string()],
    }
}

pub fn create_module_metadata() -> ComponentMetadata {
    ComponentMetadata {
        component_type: "module".to_string(),
        name: "branch-sources".to_string(),
        description: "Where a Multibranch Pipeline discovers branches and pull requests"
            .to_string(),
        fields: vec!["branch-sources".to_string()],
    }
}
