//! Job parameter parsing for multibranch projects

use jobxml_plugin_api::types::{
    get_sequence,
    get_str,
    scalar_to_string,
    single_entry,
    MappingRef,
};
use jobxml_plugin_api::{
    JobData,
    PluginError,
    PluginResult,
};
use serde_yaml::Mapping;

use crate::schema::DEFAULT_SCRIPT_PATH;
use crate::types::BranchProperty;

pub(crate) fn get_script_path(job: &JobData) -> PluginResult<String> {
    Ok(get_str(job, "script-path")?.unwrap_or_else(|| DEFAULT_SCRIPT_PATH.to_string()))
}

pub(crate) fn has_branch_sources(job: &JobData) -> bool {
    job.contains_key("branch-sources")
}

/// Splits every `branch-sources` entry into its kind and parameters, in order
pub(crate) fn get_branch_sources(job: &JobData) -> PluginResult<Vec<(&str, MappingRef<'_>)>> {
    get_sequence(job, "branch-sources")?
        .iter()
        .map(|entry| single_entry("branch-source", entry))
        .collect()
}

/// Parses the `properties` list of one branch source, keeping order
pub(crate) fn get_properties(params: &Mapping) -> PluginResult<Vec<BranchProperty>> {
    get_sequence(params, "properties")?
        .iter()
        .map(|value| {
            let name = scalar_to_string("properties", value)?.ok_or_else(|| {
                PluginError::InvalidConfig("property names must not be empty".to_string())
            })?;
            name.parse::<BranchProperty>()
        })
        .collect()
}
