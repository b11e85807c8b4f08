use std::path::Path;

use super::{
    DomainError,
    DomainResult,
};

const MAX_NAME_LENGTH: usize = 256;

/// Characters Jenkins refuses in item names
const UNSAFE_NAME_CHARS: &[char] = &['\\', ':', '*', '?', '"', '<', '>', '|', '[', ']', '#', '%', ';'];

/// Checks a job name before it becomes an output file name
///
/// `/` is accepted as a folder separator but may not lead, trail or repeat.
pub fn validate_job_name(name: &str, path: &Path) -> DomainResult<()> {
    let invalid = |message: String| DomainError::InvalidJob {
        path: path.to_path_buf(),
        message,
    };

    if name.trim().is_empty() {
        return Err(invalid("Job name cannot be empty".to_string()));
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(invalid(format!(
            "Job name '{}...' exceeds maximum length of {} characters",
            name.chars().take(32).collect::<String>(),
            MAX_NAME_LENGTH
        )));
    }

    if name.starts_with('/') || name.ends_with('/') || name.contains("//") {
        return Err(invalid(format!(
            "Job name '{}' has an empty folder segment",
            name
        )));
    }

    if name.split('/').any(|segment| segment == "." || segment == "..") {
        return Err(invalid(format!(
            "Job name '{}' contains a relative path segment",
            name
        )));
    }

    if let Some(c) = name
        .chars()
        .find(|c| c.is_control() || UNSAFE_NAME_CHARS.contains(c))
    {
        return Err(invalid(format!(
            "Job name '{}' contains invalid character {:?}",
            name, c
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &str) -> DomainResult<()> {
        validate_job_name(name, Path::new("jobs.yaml"))
    }

    #[test]
    fn test_valid_names() {
        assert!(check("test_job").is_ok());
        assert!(check("team/service-build").is_ok());
        assert!(check("Release 1.2").is_ok());
    }

    #[test]
    fn test_empty_name() {
        assert!(check("").is_err());
        assert!(check("   ").is_err());
    }

    #[test]
    fn test_name_too_long() {
        assert!(check(&"a".repeat(300)).is_err());
    }

    #[test]
    fn test_bad_folder_segments() {
        assert!(check("/job").is_err());
        assert!(check("folder/").is_err());
        assert!(check("a//b").is_err());
        assert!(check("../escape").is_err());
    }

    #[test]
    fn test_unsafe_characters() {
        let err = check("build:main").unwrap_err();
        assert!(err.to_string().contains("invalid character ':'"));
        assert!(check("tab\tname").is_err());
    }
}
