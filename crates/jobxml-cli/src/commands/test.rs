use std::collections::HashMap;
use std::io::Write;
use std::path::{
    Path,
    PathBuf,
};

use anyhow::{
    bail,
    Context,
    Result,
};
use clap::Args;
use jobxml_core::{
    GeneratedJob,
    JobLoader,
    XmlGenerator,
};

#[derive(Args, Debug)]
pub struct TestArgs {
    /// Job files or directories of *.yaml / *.yml files
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Write one `<job-name>.xml` per job here instead of printing
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: TestArgs, generator: &XmlGenerator) -> Result<()> {
    let mut loader = JobLoader::new();
    loader.load_paths(&args.paths)?;

    if loader.is_empty() {
        tracing::warn!("No jobs found");
        return Ok(());
    }

    let jobs = generator.generate_all(&loader.into_jobs())?;

    match args.output {
        Some(dir) => {
            let written = write_jobs(&dir, &jobs)?;
            tracing::info!(count = written.len(), dir = %dir.display(), "Wrote job files");
        }
        None => {
            let stdout = std::io::stdout();
            print_jobs(&mut stdout.lock(), &jobs).context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

/// Writes each job to `dir`, creating the directory when missing
///
/// Every document is staged in a temporary file next to its target first,
/// so a failed write leaves no job files behind.
pub fn write_jobs(dir: &Path, jobs: &[GeneratedJob]) -> Result<Vec<PathBuf>> {
    let mut owners: HashMap<String, &str> = HashMap::with_capacity(jobs.len());
    for job in jobs {
        let file_name = job.file_name();
        if let Some(first) = owners.insert(file_name.clone(), &job.name) {
            bail!(
                "Jobs '{}' and '{}' would both be written to {}",
                first,
                job.name,
                file_name
            );
        }
    }

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut staged = Vec::with_capacity(jobs.len());
    for job in jobs {
        let path = dir.join(job.file_name());
        if path.is_dir() {
            bail!("Cannot write job '{}': {} is a directory", job.name, path.display());
        }

        let mut file = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create a temporary file in {}", dir.display()))?;
        file.write_all(job.xml.as_bytes())
            .with_context(|| format!("Failed to stage {}", path.display()))?;
        staged.push((job, path, file));
    }

    let mut written = Vec::with_capacity(staged.len());
    for (job, path, file) in staged {
        file.persist(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::info!(job = %job.name, path = %path.display(), "Wrote job");
        written.push(path);
    }

    Ok(written)
}

pub fn print_jobs<W: Write>(out: &mut W, jobs: &[GeneratedJob]) -> std::io::Result<()> {
    for job in jobs {
        out.write_all(job.xml.as_bytes())?;
        // compact documents carry no trailing newline
        if !job.xml.ends_with('\n') {
            out.write_all(b"\n")?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const JOBS: &str = r#"
- job:
    name: test_job
    project-type: multibranch-pipeline
    branch-sources:
      - github:
          owner: SomeOwner
          repository: some-repository
- job:
    name: team/service
    project-type: multibranch-pipeline
"#;

    fn generated(name: &str, xml: &str) -> GeneratedJob {
        GeneratedJob {
            name: name.to_string(),
            xml: xml.to_string(),
        }
    }

    #[test]
    fn test_print_jobs_separates_documents() {
        let mut out = Vec::new();
        print_jobs(&mut out, &[generated("a", "<a/>\n"), generated("b", "<b/>")]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "<a/>\n<b/>\n");
    }

    #[test]
    fn test_write_jobs_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("nested").join("out");

        let written = write_jobs(&out_dir, &[generated("team/service", "<x/>")]).unwrap();
        assert_eq!(written, vec![out_dir.join("team_service.xml")]);
        assert_eq!(std::fs::read_to_string(&written[0]).unwrap(), "<x/>");
    }

    #[test]
    fn test_run_writes_every_job() {
        let temp_dir = TempDir::new().unwrap();
        let jobs_file = temp_dir.path().join("jobs.yaml");
        std::fs::write(&jobs_file, JOBS).unwrap();
        let out_dir = temp_dir.path().join("out");

        let args = TestArgs {
            paths: vec![jobs_file],
            output: Some(out_dir.clone()),
        };
        run(args, &XmlGenerator::default()).unwrap();

        let xml = std::fs::read_to_string(out_dir.join("test_job.xml")).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<repoOwner>SomeOwner</repoOwner>"));
        assert!(out_dir.join("team_service.xml").exists());
        assert_eq!(std::fs::read_dir(&out_dir).unwrap().count(), 2);
    }

    #[test]
    fn test_write_jobs_rejects_colliding_file_names() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("out");

        let err = write_jobs(
            &out_dir,
            &[generated("team/service", "<a/>"), generated("team_service", "<b/>")],
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("'team/service'"));
        assert!(message.contains("'team_service'"));
        assert!(message.contains("team_service.xml"));
        assert!(!out_dir.exists());
    }

    #[test]
    fn test_write_jobs_leaves_nothing_on_failure() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("out");
        std::fs::create_dir_all(out_dir.join("b.xml")).unwrap();

        let err = write_jobs(&out_dir, &[generated("a", "<a/>"), generated("b", "<b/>")])
            .unwrap_err();

        assert!(err.to_string().contains("Cannot write job 'b'"));
        assert!(!out_dir.join("a.xml").exists());
        assert_eq!(std::fs::read_dir(&out_dir).unwrap().count(), 1);
    }

    #[test]
    fn test_run_fails_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let jobs_file = temp_dir.path().join("jobs.yaml");
        std::fs::write(
            &jobs_file,
            "- job: {name: good, project-type: multibranch-pipeline}\n- job: {name: bad}\n",
        )
        .unwrap();
        let out_dir = temp_dir.path().join("out");

        let args = TestArgs {
            paths: vec![jobs_file],
            output: Some(out_dir.clone()),
        };
        let err = run(args, &XmlGenerator::default()).unwrap_err();

        assert!(err.to_string().contains("Job 'bad'"));
        assert!(!out_dir.exists());
    }
}
