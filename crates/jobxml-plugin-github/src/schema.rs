//! Class names, option tables and field specs for github-branch-source XML

use jobxml_plugin_api::{
    FieldSpec,
    OptionTable,
};

pub(crate) const SOURCE_CLASS: &str = "org.jenkinsci.plugins.github_branch_source.GitHubSCMSource";

pub(crate) const SOURCE_PLUGIN: &str = "github-branch-source";

/// XStream escapes `_` in package names when it writes element tags
pub(crate) const TRAIT_TAG_PREFIX: &str = "org.jenkinsci.plugins.github__branch__source.";

pub(crate) const TRUST_CLASS_PREFIX: &str =
    "org.jenkinsci.plugins.github_branch_source.ForkPullRequestDiscoveryTrait$";

pub(crate) const WILDCARD_FILTER_TAG: &str = "jenkins.scm.impl.trait.WildcardSCMHeadFilterTrait";

pub(crate) const SCM_API_PLUGIN: &str = "scm-api";

pub(crate) const BRANCH_STRATEGIES: &OptionTable = &[
    ("exclude-branches-filed-as-prs", "1"),
    ("only-branches-filed-as-prs", "2"),
    ("all", "3"),
];

pub(crate) const PULL_REQUEST_STRATEGIES: &OptionTable = &[
    ("merge-prs-with-current-target-branch-revision", "1"),
    ("use-current-pr-revision", "2"),
    ("both", "3"),
];

pub(crate) const SOURCE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("owner", "repoOwner"),
    FieldSpec::required("repository", "repository"),
];

pub(crate) const BRANCH_DISCOVERY_FIELDS: &[FieldSpec] = &[FieldSpec::choice(
    "strategy",
    "strategyId",
    "exclude-branches-filed-as-prs",
    BRANCH_STRATEGIES,
)];

pub(crate) const PULL_REQUEST_DISCOVERY_FIELDS: &[FieldSpec] = &[FieldSpec::choice(
    "strategy",
    "strategyId",
    "merge-prs-with-current-target-branch-revision",
    PULL_REQUEST_STRATEGIES,
)];

pub(crate) const WILDCARD_FILTER_FIELDS: &[FieldSpec] = &[
    FieldSpec::with_default("include", "includes", "*"),
    FieldSpec::with_default("exclude", "excludes", ""),
];
