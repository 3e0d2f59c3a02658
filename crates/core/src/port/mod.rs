// Port Layer - Interfaces for external collaborators

pub mod job_output;
pub mod jobs;

// Re-exports
pub use job_output::JobOutput;
pub use jobs::Jobs;

#[cfg(test)]
pub use jobs::MockJobs;
