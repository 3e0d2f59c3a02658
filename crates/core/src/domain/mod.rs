// Domain Layer - Pure entities and error taxonomies

pub mod error;
pub mod job;

// Re-exports
pub use error::{AggregationError, ConversionError, JobError};
pub use job::{Company, Job, JobId, Role, Salary};
