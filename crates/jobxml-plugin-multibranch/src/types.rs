//! Branch properties applied by the default property strategy

use std::fmt;
use std::str::FromStr;

use jobxml_plugin_api::PluginError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchProperty {
    SuppressAutomaticScmTriggering,
}

impl BranchProperty {
    pub const ALL: [BranchProperty; 1] = [BranchProperty::SuppressAutomaticScmTriggering];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuppressAutomaticScmTriggering => "suppress-automatic-scm-triggering",
        }
    }

    /// Element tag Jenkins deserializes into the property class
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::SuppressAutomaticScmTriggering => "jenkins.branch.NoTriggerBranchProperty",
        }
    }
}

impl fmt::Display for BranchProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BranchProperty {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                PluginError::invalid_option(
                    "properties",
                    s,
                    Self::ALL.iter().map(BranchProperty::as_str),
                )
            })
    }
}
