//! Discovery behaviors and fork trust levels

use std::fmt;
use std::str::FromStr;

use jobxml_plugin_api::PluginError;

/// The closed set of `behaviors` keys under a github branch source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    DiscoverBranches,
    DiscoverPullRequestsFromOrigin,
    DiscoverPullRequestsFromForks,
    FilterByNameWithWildcards,
}

impl Behavior {
    pub const ALL: [Behavior; 4] = [
        Behavior::DiscoverBranches,
        Behavior::DiscoverPullRequestsFromOrigin,
        Behavior::DiscoverPullRequestsFromForks,
        Behavior::FilterByNameWithWildcards,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DiscoverBranches => "discover-branches",
            Self::DiscoverPullRequestsFromOrigin => "discover-pull-requests-from-origin",
            Self::DiscoverPullRequestsFromForks => "discover-pull-requests-from-forks",
            Self::FilterByNameWithWildcards => "filter-by-name-with-wildcards",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Behavior::as_str).collect()
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Behavior {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| PluginError::invalid_option("behaviors", s, Self::names()))
    }
}

/// Who may have pull requests from forks built with their own Jenkinsfile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrustPolicy {
    #[default]
    Contributors,
    Everyone,
    AdminsAndWriters,
    Nobody,
}

impl TrustPolicy {
    pub const ALL: [TrustPolicy; 4] = [
        TrustPolicy::Contributors,
        TrustPolicy::Everyone,
        TrustPolicy::AdminsAndWriters,
        TrustPolicy::Nobody,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contributors => "contributors",
            Self::Everyone => "everyone",
            Self::AdminsAndWriters => "admins-and-writers",
            Self::Nobody => "nobody",
        }
    }

    /// Inner class name of `ForkPullRequestDiscoveryTrait` implementing the policy
    pub fn class_suffix(&self) -> &'static str {
        match self {
            Self::Contributors => "TrustContributors",
            Self::Everyone => "TrustEveryone",
            Self::AdminsAndWriters => "TrustPermission",
            Self::Nobody => "TrustNobody",
        }
    }

    pub fn class_name(&self) -> String {
        format!("{}{}", crate::schema::TRUST_CLASS_PREFIX, self.class_suffix())
    }
}

impl FromStr for TrustPolicy {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                PluginError::invalid_option("trust", s, Self::ALL.iter().map(TrustPolicy::as_str))
            })
    }
}
