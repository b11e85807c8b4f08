//! Generic YAML-mapping to XML-element translation

use serde_yaml::Mapping;

use crate::error::{
    PluginError,
    PluginResult,
};
use crate::schema::{
    lookup_option,
    option_keys,
    FieldSpec,
};
use crate::types::get_str;
use crate::xml::XmlElement;

/// Fills `element` with one child per field spec and returns it
///
/// Each value comes from `data[spec.key]`, falling back to `spec.default`.
/// When a spec carries an option table the value must be one of its keys and
/// the mapped code is written instead. With `fail_required` unset, fields
/// that resolve to nothing are skipped.
pub fn convert_mapping_to_xml(
    mut element: XmlElement, data: &Mapping, fields: &[FieldSpec], fail_required: bool,
) -> PluginResult<XmlElement> {
    for spec in fields {
        let value = match get_str(data, spec.key)? {
            Some(value) => value,
            None => match spec.default {
                Some(default) => default.to_string(),
                None if fail_required => {
                    return Err(PluginError::MissingRequired(spec.key.to_string()))
                }
                None => continue,
            },
        };

        let text = match spec.options {
            Some(table) => lookup_option(table, &value)
                .ok_or_else(|| PluginError::invalid_option(spec.key, &value, option_keys(table)))?
                .to_string(),
            None => value,
        };

        element.set_child_text(spec.tag, text);
    }

    Ok(element)
}
