//! Accessors over the YAML job mapping

use serde_yaml::{
    Mapping,
    Value,
};

use crate::error::{
    PluginError,
    PluginResult,
};

/// A job definition as parsed from YAML
pub type JobData = Mapping;

/// Renders a scalar as element text; `None` for null
pub fn scalar_to_string(key: &str, value: &Value) -> PluginResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Tagged(tagged) => scalar_to_string(key, &tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => Err(PluginError::InvalidConfig(format!(
            "'{key}' must be a scalar value"
        ))),
    }
}

/// Reads an optional scalar, treating null as absent
pub fn get_str(data: &Mapping, key: &str) -> PluginResult<Option<String>> {
    match data.get(key) {
        Some(value) => scalar_to_string(key, value),
        None => Ok(None),
    }
}

pub fn require_str(data: &Mapping, key: &str) -> PluginResult<String> {
    get_str(data, key)?.ok_or_else(|| PluginError::MissingRequired(key.to_string()))
}

/// Reads an optional nested mapping; null yields an empty mapping
pub fn get_mapping<'a>(data: &'a Mapping, key: &str) -> PluginResult<Option<MappingRef<'a>>> {
    match data.get(key) {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(MappingRef::Empty)),
        Some(Value::Mapping(m)) => Ok(Some(MappingRef::Borrowed(m))),
        Some(_) => Err(PluginError::InvalidConfig(format!(
            "'{key}' must be a mapping"
        ))),
    }
}

/// Reads an optional sequence; null yields an empty slice
pub fn get_sequence<'a>(data: &'a Mapping, key: &str) -> PluginResult<&'a [Value]> {
    match data.get(key) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Sequence(seq)) => Ok(seq.as_slice()),
        Some(_) => Err(PluginError::InvalidConfig(format!(
            "'{key}' must be a list"
        ))),
    }
}

/// Splits a single-key mapping such as `- github: {...}` into its key and body
pub fn single_entry<'a>(what: &str, value: &'a Value) -> PluginResult<(&'a str, MappingRef<'a>)> {
    let mapping = match value {
        Value::Mapping(m) => m,
        Value::String(name) => return Ok((name.as_str(), MappingRef::Empty)),
        _ => {
            return Err(PluginError::InvalidConfig(format!(
                "each {what} entry must be a single-key mapping"
            )))
        }
    };

    let mut entries = mapping.iter();
    let (key, body) = match (entries.next(), entries.next()) {
        (Some(entry), None) => entry,
        _ => {
            return Err(PluginError::InvalidConfig(format!(
                "each {what} entry must have exactly one key, found {}",
                mapping.len()
            )))
        }
    };

    let name = key.as_str().ok_or_else(|| {
        PluginError::InvalidConfig(format!("{what} names must be strings"))
    })?;

    let body = match body {
        Value::Null => MappingRef::Empty,
        Value::Mapping(m) => MappingRef::Borrowed(m),
        _ => {
            return Err(PluginError::InvalidConfig(format!(
                "parameters of {what} '{name}' must be a mapping"
            )))
        }
    };

    Ok((name, body))
}

/// A mapping that may be absent in the source and stands in as empty
#[derive(Debug, Clone, Copy)]
pub enum MappingRef<'a> {
    Borrowed(&'a Mapping),
    Empty,
}

impl<'a> MappingRef<'a> {
    pub fn as_mapping(&self) -> &'a Mapping {
        static EMPTY: std::sync::OnceLock<Mapping> = std::sync::OnceLock::new();
        match *self {
            MappingRef::Borrowed(m) => m,
            MappingRef::Empty => EMPTY.get_or_init(Mapping::new),
        }
    }

    /// Entries in source order
    pub fn iter(&self) -> impl Iterator<Item = (&'a Value, &'a Value)> + 'a {
        self.as_mapping().iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(src: &str) -> Mapping {
        serde_yaml::from_str(src).unwrap()
    }

    #[test]
    fn test_scalars_render_as_text() {
        let data = yaml("a: text\nb: 3\nc: true\nd: ~");
        assert_eq!(get_str(&data, "a").unwrap().as_deref(), Some("text"));
        assert_eq!(get_str(&data, "b").unwrap().as_deref(), Some("3"));
        assert_eq!(get_str(&data, "c").unwrap().as_deref(), Some("true"));
        assert_eq!(get_str(&data, "d").unwrap(), None);
        assert_eq!(get_str(&data, "missing").unwrap(), None);
    }

    #[test]
    fn test_require_str_reports_key() {
        let data = yaml("owner: SomeOwner");
        assert_eq!(
            require_str(&data, "repository"),
            Err(PluginError::MissingRequired("repository".to_string()))
        );
    }

    #[test]
    fn test_non_scalar_is_invalid() {
        let data = yaml("owner: [a, b]");
        assert!(matches!(
            get_str(&data, "owner"),
            Err(PluginError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_get_mapping_null_is_empty() {
        let data = yaml("behaviors:\n  discover-branches:\n");
        let behaviors = get_mapping(&data, "behaviors").unwrap().unwrap();
        let (name, params) = behaviors.iter().next().unwrap();
        assert_eq!(name.as_str(), Some("discover-branches"));
        assert!(params.is_null());
    }

    #[test]
    fn test_get_sequence_defaults_to_empty() {
        let data = yaml("properties: ~");
        assert!(get_sequence(&data, "properties").unwrap().is_empty());
        assert!(get_sequence(&data, "other").unwrap().is_empty());
        assert!(get_sequence(&yaml("properties: x"), "properties").is_err());
    }

    #[test]
    fn test_single_entry() {
        let value: Value = serde_yaml::from_str("github:\n  owner: me").unwrap();
        let (name, body) = single_entry("branch-source", &value).unwrap();
        assert_eq!(name, "github");
        assert_eq!(get_str(body.as_mapping(), "owner").unwrap().as_deref(), Some("me"));

        let two: Value = serde_yaml::from_str("github: {}\ngit: {}").unwrap();
        assert!(matches!(
            single_entry("branch-source", &two),
            Err(PluginError::InvalidConfig(_))
        ));
    }
}
