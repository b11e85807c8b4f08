//! Behavior to trait element mapping

use jobxml_plugin_api::types::get_str;
use jobxml_plugin_api::{
    convert_mapping_to_xml,
    PluginResult,
    XmlElement,
};
use serde_yaml::Mapping;

use crate::schema::{
    BRANCH_DISCOVERY_FIELDS,
    PULL_REQUEST_DISCOVERY_FIELDS,
    SCM_API_PLUGIN,
    TRAIT_TAG_PREFIX,
    WILDCARD_FILTER_FIELDS,
    WILDCARD_FILTER_TAG,
};
use crate::types::{
    Behavior,
    TrustPolicy,
};

/// Builds the trait element for one `behaviors` entry
///
/// Unknown names fail with an error listing every supported behavior.
pub fn add_behavior(name: &str, params: &Mapping) -> PluginResult<XmlElement> {
    let behavior: Behavior = name.parse()?;
    tracing::trace!(behavior = %behavior, "adding trait");

    match behavior {
        Behavior::DiscoverBranches => branch_discovery(params),
        Behavior::DiscoverPullRequestsFromOrigin => origin_pull_request_discovery(params),
        Behavior::DiscoverPullRequestsFromForks => fork_pull_request_discovery(params),
        Behavior::FilterByNameWithWildcards => wildcard_filter(params),
    }
}

fn trait_element(name: &str) -> XmlElement {
    XmlElement::new(format!("{TRAIT_TAG_PREFIX}{name}"))
}

fn branch_discovery(params: &Mapping) -> PluginResult<XmlElement> {
    convert_mapping_to_xml(
        trait_element("BranchDiscoveryTrait"),
        params,
        BRANCH_DISCOVERY_FIELDS,
        true,
    )
}

fn origin_pull_request_discovery(params: &Mapping) -> PluginResult<XmlElement> {
    convert_mapping_to_xml(
        trait_element("OriginPullRequestDiscoveryTrait"),
        params,
        PULL_REQUEST_DISCOVERY_FIELDS,
        true,
    )
}

fn fork_pull_request_discovery(params: &Mapping) -> PluginResult<XmlElement> {
    let trust = match get_str(params, "trust")? {
        Some(value) => value.parse::<TrustPolicy>()?,
        None => TrustPolicy::default(),
    };

    let element = convert_mapping_to_xml(
        trait_element("ForkPullRequestDiscoveryTrait"),
        params,
        PULL_REQUEST_DISCOVERY_FIELDS,
        true,
    )?;

    Ok(element.with_child(XmlElement::with_class("trust", trust.class_name())))
}

fn wildcard_filter(params: &Mapping) -> PluginResult<XmlElement> {
    convert_mapping_to_xml(
        XmlElement::new(WILDCARD_FILTER_TAG).with_attr("plugin", SCM_API_PLUGIN),
        params,
        WILDCARD_FILTER_FIELDS,
        true,
    )
}
