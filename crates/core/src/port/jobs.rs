// Jobs Port (Repository interface over the record store)

use crate::domain::{Job, JobError, JobId};

/// Read-only repository over the job record store.
///
/// Adapters implement the opaque-channel lookups; the `_e` lookups report
/// through [`JobError`] and are derived from them, so every adapter maps an
/// absent key to `NotFound` and a lookup fault to `Generic` the same way.
#[cfg_attr(test, mockall::automock)]
pub trait Jobs: Send + Sync {
    /// Find job by ID (`None` when absent, `Err` only on a lookup fault)
    fn find_by_id(&self, id: JobId) -> anyhow::Result<Option<Job>>;

    /// Every job, in dataset insertion order
    fn find_all(&self) -> anyhow::Result<Vec<Job>>;

    /// Find job by ID, treating absence as `NotFound`
    fn find_by_id_e(&self, id: JobId) -> Result<Job, JobError> {
        match self.find_by_id(id) {
            Ok(Some(job)) => Ok(job),
            Ok(None) => Err(JobError::NotFound(id)),
            Err(e) => Err(JobError::Generic(e.to_string())),
        }
    }

    /// Every job, lookup faults reported as `Generic`
    fn find_all_e(&self) -> Result<Vec<Job>, JobError> {
        self.find_all().map_err(|e| JobError::Generic(e.to_string()))
    }
}
