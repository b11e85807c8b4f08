pub mod error;
pub mod job;
pub mod validation;

pub use error::{
    DomainError,
    DomainResult,
};
pub use job::{
    GeneratedJob,
    JobDefinition,
};
pub use validation::validate_job_name;
