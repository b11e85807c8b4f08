//! Parameter parsing for the github branch source

use jobxml_plugin_api::types::{
    get_mapping,
    get_str,
    MappingRef,
};
use jobxml_plugin_api::{
    PluginError,
    PluginResult,
};
use serde_yaml::{
    Mapping,
    Value,
};

/// Gets the optional credentials id
pub(crate) fn get_credentials_id(params: &Mapping) -> PluginResult<Option<String>> {
    get_str(params, "credentials-id")
}

/// Gets the `behaviors` entries in declaration order
///
/// A behavior written without parameters (`discover-branches:`) yields an
/// empty mapping.
pub(crate) fn get_behaviors(params: &Mapping) -> PluginResult<Option<Vec<(&str, MappingRef<'_>)>>> {
    let behaviors = match get_mapping(params, "behaviors")? {
        Some(behaviors) => behaviors,
        None => return Ok(None),
    };

    behaviors
        .iter()
        .map(|(name, body)| {
            let name = name.as_str().ok_or_else(|| {
                PluginError::InvalidConfig("behavior names must be strings".to_string())
            })?;
            let body = match body {
                Value::Null => MappingRef::Empty,
                Value::Mapping(m) => MappingRef::Borrowed(m),
                _ => {
                    return Err(PluginError::InvalidConfig(format!(
                        "parameters of behavior '{name}' must be a mapping"
                    )))
                }
            };
            Ok((name, body))
        })
        .collect::<PluginResult<Vec<_>>>()
        .map(Some)
}
