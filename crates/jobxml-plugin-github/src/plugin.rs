//! The `github` branch source kind

use jobxml_plugin_api::*;
use serde_yaml::Mapping;

use crate::schema::{
    SOURCE_CLASS,
    SOURCE_FIELDS,
    SOURCE_PLUGIN,
};
use crate::{
    config,
    mapper,
    metadata,
};

/// Builds `GitHubSCMSource` elements from `github:` branch source entries
pub struct GitHubBranchSource {
    metadata: ComponentMetadata,
}

impl Default for GitHubBranchSource {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubBranchSource {
    pub fn new() -> Self {
        Self {
            metadata: metadata::create_metadata(),
        }
    }
}

impl BranchSourceKind for GitHubBranchSource {
    fn metadata(&self) -> &ComponentMetadata {
        &self.metadata
    }

    fn build_source(&self, params: &Mapping) -> PluginResult<XmlElement> {
        let mut source = XmlElement::with_class("source", SOURCE_CLASS).with_attr("plugin", SOURCE_PLUGIN);

        if let Some(credentials_id) = config::get_credentials_id(params)? {
            source.push_child(XmlElement::new("credentialsId").with_text(credentials_id));
        }

        let mut source = convert_mapping_to_xml(source, params, SOURCE_FIELDS, true)?;

        if let Some(behaviors) = config::get_behaviors(params)? {
            let traits = behaviors
                .into_iter()
                .map(|(name, body)| mapper::add_behavior(name, body.as_mapping()))
                .collect::<PluginResult<Vec<_>>>()?;
            source.push_child(XmlElement::new("traits").with_children(traits));
        }

        tracing::debug!(
            owner = ?source.child_text("repoOwner"),
            repository = ?source.child_text("repository"),
            "built github branch source"
        );

        Ok(source)
    }
}
