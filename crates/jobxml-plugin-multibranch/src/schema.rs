//! Jenkins class names for workflow-multibranch and branch-api XML

pub const PROJECT_CLASS: &str = "org.jenkinsci.plugins.workflow.multibranch.WorkflowMultiBranchProject";

pub(crate) const PROJECT_PLUGIN: &str = "workflow-multibranch";

pub(crate) const DEFAULT_SCRIPT_PATH: &str = "Jenkinsfile";

pub(crate) const FACTORY_CLASS: &str =
    "org.jenkinsci.plugins.workflow.multibranch.WorkflowBranchProjectFactory";

pub(crate) const SOURCE_LIST_CLASS: &str = "jenkins.branch.MultiBranchProject$BranchSourceList";

pub(crate) const BRANCH_API_PLUGIN: &str = "branch-api";

pub(crate) const BRANCH_SOURCE_TAG: &str = "jenkins.branch.BranchSource";

pub(crate) const DEFAULT_STRATEGY_CLASS: &str = "jenkins.branch.DefaultBranchPropertyStrategy";

pub(crate) const EMPTY_LIST_CLASS: &str = "empty-list";

pub(crate) const ARRAY_LIST_CLASS: &str = "java.util.Arrays$ArrayList";

pub(crate) const PROPERTY_ARRAY_CLASS: &str = "jenkins.branch.BranchProperty-array";
