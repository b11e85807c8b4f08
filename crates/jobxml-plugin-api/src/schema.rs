use serde::{
    Deserialize,
    Serialize,
};

/// Maps human-readable option strings to the codes Jenkins expects
pub type OptionTable = [(&'static str, &'static str)];

/// Looks up `key` in an option table
pub fn lookup_option(table: &OptionTable, key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// The keys of an option table, in declaration order
pub fn option_keys(table: &OptionTable) -> Vec<String> {
    table.iter().map(|(k, _)| k.to_string()).collect()
}

/// One source-key to XML-element translation rule
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Key in the YAML mapping
    pub key: &'static str,
    /// Tag of the child element receiving the value
    pub tag: &'static str,
    /// Value used when the key is absent
    pub default: Option<&'static str>,
    /// Restricts the value to the table's keys and writes the mapped code
    pub options: Option<&'static OptionTable>,
}

impl FieldSpec {
    pub const fn required(key: &'static str, tag: &'static str) -> Self {
        Self {
            key,
            tag,
            default: None,
            options: None,
        }
    }

    pub const fn with_default(key: &'static str, tag: &'static str, default: &'static str) -> Self {
        Self {
            key,
            tag,
            default: Some(default),
            options: None,
        }
    }

    pub const fn choice(
        key: &'static str, tag: &'static str, default: &'static str,
        options: &'static OptionTable,
    ) -> Self {
        Self {
            key,
            tag,
            default: Some(default),
            options: Some(options),
        }
    }
}

/// Describes a registered component for listings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComponentMetadata {
    /// Component family, e.g. "project-type" or "branch-source"
    pub component_type: String,
    /// Name used in job YAML (e.g., "github")
    pub name: String,
    pub description: String,
    /// Keys recognized under this component
    pub fields: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &OptionTable = &[("all", "3"), ("none", "0")];

    #[test]
    fn test_lookup_option() {
        assert_eq!(lookup_option(TABLE, "all"), Some("3"));
        assert_eq!(lookup_option(TABLE, "some"), None);
    }

    #[test]
    fn test_option_keys_keep_order() {
        assert_eq!(option_keys(TABLE), vec!["all", "none"]);
    }
}
