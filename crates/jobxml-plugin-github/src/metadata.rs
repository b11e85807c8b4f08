//! GitHub branch source metadata

use jobxml_plugin_api::registry::BRANCH_SOURCE;
use jobxml_plugin_api::ComponentMetadata;

/// Creates the component metadata for the `github` branch source
pub fn create_metadata() -> ComponentMetadata {
    ComponentMetadata {
        component_type: BRANCH_SOURCE.to_string(),
        name: "github".to_string(),
        description: "Discover branches and pull requests of a GitHub repository".to_string(),
        fields: ["owner", "repository", "credentials-id", "behaviors", "properties"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}
