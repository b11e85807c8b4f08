use jobxml_plugin_api::{
    render,
    ComponentRegistry,
    PluginError,
    RenderOptions,
    XmlElement,
};

use crate::domain::{
    DomainError,
    DomainResult,
    GeneratedJob,
    JobDefinition,
};
use crate::plugins::create_component_registry;

/// Turns job definitions into Jenkins XML documents
pub struct XmlGenerator {
    registry: ComponentRegistry,
    options: RenderOptions,
}

impl Default for XmlGenerator {
    fn default() -> Self {
        Self::new(create_component_registry(), RenderOptions::default())
    }
}

impl XmlGenerator {
    pub fn new(registry: ComponentRegistry, options: RenderOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Builds the complete element tree of one job
    ///
    /// Module output is attached only once every module has succeeded, so a
    /// failing job never yields a partial tree.
    pub fn build_tree(&self, job: &JobDefinition) -> DomainResult<XmlElement> {
        let wrap = |e: PluginError| DomainError::generation(&job.name, e);

        let project_type = job.project_type().map_err(wrap)?;
        let mut root = self
            .registry
            .project_type(&project_type)
            .and_then(|builder| builder.root_xml(&job.data))
            .map_err(wrap)?;

        let mut children = Vec::new();
        for module in self.registry.modules() {
            let produced = module
                .gen_xml(&self.registry, &root, &job.data)
                .map_err(wrap)?;

            tracing::debug!(
                job = %job.name,
                module = module.name(),
                elements = produced.len(),
                "Module finished"
            );
            children.extend(produced);
        }

        for child in children {
            root.push_child(child);
        }
        Ok(root)
    }

    pub fn generate(&self, job: &JobDefinition) -> DomainResult<GeneratedJob> {
        let root = self.build_tree(job)?;
        let xml = render(&root, self.options).map_err(|e| DomainError::generation(&job.name, e))?;

        tracing::debug!(job = %job.name, bytes = xml.len(), "Generated job XML");
        Ok(GeneratedJob {
            name: job.name.clone(),
            xml,
        })
    }

    /// Generates every job, stopping at the first failure
    pub fn generate_all(&self, jobs: &[JobDefinition]) -> DomainResult<Vec<GeneratedJob>> {
        jobs.iter().map(|job| self.generate(job)).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::infrastructure::JobLoader;

    const SOME_REPOSITORY_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<org.jenkinsci.plugins.workflow.multibranch.WorkflowMultiBranchProject plugin="workflow-multibranch">
  <factory class="org.jenkinsci.plugins.workflow.multibranch.WorkflowBranchProjectFactory">
    <owner class="org.jenkinsci.plugins.workflow.multibranch.WorkflowMultiBranchProject" reference="../.."/>
    <scriptPath>Jenkinsfile</scriptPath>
  </factory>
  <sources class="jenkins.branch.MultiBranchProject$BranchSourceList" plugin="branch-api">
    <data>
      <jenkins.branch.BranchSource>
        <source class="org.jenkinsci.plugins.github_branch_source.GitHubSCMSource" plugin="github-branch-source">
          <repoOwner>SomeOwner</repoOwner>
          <repository>some-repository</repository>
        </source>
        <strategy class="jenkins.branch.DefaultBranchPropertyStrategy">
          <properties class="empty-list"/>
        </strategy>
      </jenkins.branch.BranchSource>
    </data>
    <owner class="org.jenkinsci.plugins.workflow.multibranch.WorkflowMultiBranchProject" reference="../.."/>
  </sources>
</org.jenkinsci.plugins.workflow.multibranch.WorkflowMultiBranchProject>
"#;

    fn load(content: &str) -> Vec<JobDefinition> {
        let mut loader = JobLoader::new();
        loader.parse_str(content, Path::new("jobs.yaml")).unwrap();
        loader.into_jobs()
    }

    #[test]
    fn test_some_repository_end_to_end() {
        let jobs = load(
            r#"
- job:
    name: test_job
    project-type: multibranch-pipeline
    branch-sources:
      - github:
          owner: SomeOwner
          repository: some-repository
"#,
        );

        let generated = XmlGenerator::default().generate(&jobs[0]).unwrap();
        assert_eq!(generated.name, "test_job");
        assert_eq!(generated.xml, SOME_REPOSITORY_XML);
    }

    #[test]
    fn test_full_github_source() {
        let jobs = load(
            r#"
- job:
    name: full
    project-type: multibranch-pipeline
    script-path: ci/Jenkinsfile
    branch-sources:
      - github:
          owner: SomeOwner
          repository: some-repository
          credentials-id: gh-token
          behaviors:
            discover-branches:
              strategy: all
            discover-pull-requests-from-forks:
              trust: nobody
            filter-by-name-with-wildcards:
              include: "release/*"
          properties:
            - suppress-automatic-scm-triggering
"#,
        );

        let root = XmlGenerator::default().build_tree(&jobs[0]).unwrap();
        assert_eq!(root.child("factory").unwrap().child_text("scriptPath"), Some("ci/Jenkinsfile"));

        let entry = root
            .child("sources")
            .and_then(|s| s.child("data"))
            .and_then(|d| d.child("jenkins.branch.BranchSource"))
            .unwrap();
        let source = entry.child("source").unwrap();
        let tags: Vec<_> = source.children.iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(tags, vec!["credentialsId", "repoOwner", "repository", "traits"]);

        let traits = source.child("traits").unwrap();
        assert_eq!(traits.children.len(), 3);
        assert_eq!(traits.children[0].child_text("strategyId"), Some("3"));
        assert_eq!(
            traits.children[1].child("trust").unwrap().attr("class"),
            Some("org.jenkinsci.plugins.github_branch_source.ForkPullRequestDiscoveryTrait$TrustNobody")
        );
        assert_eq!(traits.children[2].child_text("includes"), Some("release/*"));

        let properties = entry.child("strategy").unwrap().child("properties").unwrap();
        assert_eq!(properties.attr("class"), Some("java.util.Arrays$ArrayList"));
    }

    #[test]
    fn test_multibranch_without_sources() {
        let jobs = load("- job: {name: bare, project-type: multibranch-pipeline}\n");
        let root = XmlGenerator::default().build_tree(&jobs[0]).unwrap();

        let tags: Vec<_> = root.children.iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(tags, vec!["factory"]);
    }

    #[test]
    fn test_missing_project_type_is_unknown() {
        let jobs = load("- job: {name: plain}\n");
        let err = XmlGenerator::default().generate(&jobs[0]).unwrap_err();

        match err {
            DomainError::Generation { job, source } => {
                assert_eq!(job, "plain");
                assert!(matches!(
                    source,
                    PluginError::UnknownComponent { ref name, ref valid, .. }
                        if name == "freestyle" && valid == &vec!["multibranch-pipeline".to_string()]
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unsupported_git_source() {
        let jobs = load(
            "- job:\n    name: legacy\n    project-type: multibranch-pipeline\n    branch-sources:\n      - git:\n          remote: https://example.com/r.git\n",
        );
        let err = XmlGenerator::default().generate(&jobs[0]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Job 'legacy': Unknown branch-source 'git', registered: github"
        );
    }

    #[test]
    fn test_generate_all_stops_at_first_error() {
        let jobs = load(
            "- job: {name: ok, project-type: multibranch-pipeline}\n- job: {name: broken, project-type: matrix}\n",
        );
        let err = XmlGenerator::default().generate_all(&jobs).unwrap_err();
        assert!(matches!(err, DomainError::Generation { ref job, .. } if job == "broken"));
    }

    #[test]
    fn test_compact_output() {
        let jobs = load("- job: {name: bare, project-type: multibranch-pipeline}\n");
        let generator = XmlGenerator::new(create_component_registry(), RenderOptions::compact());

        let xml = generator.generate(&jobs[0]).unwrap().xml;
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?><org.jenkinsci"));
        assert!(!xml.contains('\n'));
    }
}
