//! Element builders for multibranch projects

use jobxml_plugin_api::{
    ComponentRegistry,
    JobData,
    PluginError,
    PluginResult,
    XmlElement,
    PARENT_REFERENCE,
};
use serde_yaml::Mapping;

use crate::config;
use crate::schema::{
    ARRAY_LIST_CLASS,
    BRANCH_API_PLUGIN,
    BRANCH_SOURCE_TAG,
    DEFAULT_STRATEGY_CLASS,
    EMPTY_LIST_CLASS,
    FACTORY_CLASS,
    PROJECT_CLASS,
    PROJECT_PLUGIN,
    PROPERTY_ARRAY_CLASS,
    SOURCE_LIST_CLASS,
};

/// Back-reference from a nested element to the enclosing project
fn project_owner() -> XmlElement {
    XmlElement::with_class("owner", PROJECT_CLASS).with_attr("reference", PARENT_REFERENCE)
}

/// Creates the `WorkflowMultiBranchProject` skeleton for one job
pub fn build_root_element(job: &JobData) -> PluginResult<XmlElement> {
    let script_path = config::get_script_path(job)?;

    let factory = XmlElement::with_class("factory", FACTORY_CLASS)
        .with_child(project_owner())
        .with_child(XmlElement::new("scriptPath").with_text(script_path));

    Ok(XmlElement::new(PROJECT_CLASS)
        .with_attr("plugin", PROJECT_PLUGIN)
        .with_child(factory))
}

/// Creates the `<strategy>` element of one branch source
///
/// An empty `properties` list is written with the `empty-list` class, which
/// Jenkins reads differently from an array list with no entries.
pub fn build_property_strategy(params: &Mapping) -> PluginResult<XmlElement> {
    let properties = config::get_properties(params)?;

    let list = if properties.is_empty() {
        XmlElement::with_class("properties", EMPTY_LIST_CLASS)
    } else {
        XmlElement::with_class("properties", ARRAY_LIST_CLASS).with_children(
            properties.iter().map(|property| {
                XmlElement::with_class("a", PROPERTY_ARRAY_CLASS)
                    .with_child(XmlElement::new(property.class_name()))
            }),
        )
    };

    Ok(XmlElement::with_class("strategy", DEFAULT_STRATEGY_CLASS).with_child(list))
}

/// Creates the `<sources>` container for a job's `branch-sources`
///
/// Returns `None` when the job has no `branch-sources` key.
pub(crate) fn build_branch_sources(
    registry: &ComponentRegistry, root: &XmlElement, job: &JobData,
) -> PluginResult<Option<XmlElement>> {
    if !config::has_branch_sources(job) {
        return Ok(None);
    }

    if root.tag != PROJECT_CLASS {
        return Err(PluginError::WrongProjectType(
            "Branch Sources may only be used for Multibranch Pipelines".to_string(),
        ));
    }

    let mut data = XmlElement::new("data");
    for (kind, params) in config::get_branch_sources(job)? {
        let params = params.as_mapping();
        let source = registry.branch_source(kind)?.build_source(params)?;
        let strategy = build_property_strategy(params)?;

        tracing::debug!(kind = %kind, "built branch source");
        data.push_child(
            XmlElement::new(BRANCH_SOURCE_TAG)
                .with_child(source)
                .with_child(strategy),
        );
    }

    Ok(Some(
        XmlElement::with_class("sources", SOURCE_LIST_CLASS)
            .with_attr("plugin", BRANCH_API_PLUGIN)
            .with_child(data)
            .with_child(project_owner()),
    ))
}
