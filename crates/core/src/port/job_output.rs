// Job Output Port (rendering collaborator for lookups)

use crate::domain::{Job, JobId};

/// Sink for the outcome of a print-if-found lookup
pub trait JobOutput {
    /// A matching job was found
    fn job(&self, job: &Job);

    /// No job is stored under `id`
    fn not_found(&self, id: JobId);

    /// The lookup itself failed
    fn failure(&self, error: &anyhow::Error);
}
