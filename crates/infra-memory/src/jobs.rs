// In-memory Jobs Implementation

use crate::JobStore;
use jobdesk_core::domain::{Job, JobId};
use jobdesk_core::port::Jobs;
use std::sync::Arc;
use tracing::debug;

pub struct InMemoryJobs {
    store: Arc<JobStore>,
}

impl InMemoryJobs {
    pub fn new(store: Arc<JobStore>) -> Self {
        Self { store }
    }
}

impl Jobs for InMemoryJobs {
    fn find_by_id(&self, id: JobId) -> anyhow::Result<Option<Job>> {
        let job = self.store.get(id).cloned();
        debug!(job_id = %id, found = job.is_some(), "Job lookup");
        Ok(job)
    }

    fn find_all(&self) -> anyhow::Result<Vec<Job>> {
        debug!(jobs = self.store.len(), "Listing all jobs");
        Ok(self.store.all().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobdesk_core::domain::JobError;

    fn setup_repo() -> InMemoryJobs {
        InMemoryJobs::new(Arc::new(JobStore::seeded()))
    }

    #[test]
    fn test_find_by_id_present_and_absent() {
        let repo = setup_repo();

        for id in 1..=3 {
            let found = repo.find_by_id(JobId::new(id)).unwrap();
            assert_eq!(found.map(|job| job.id), Some(JobId::new(id)));
        }

        assert!(repo.find_by_id(JobId::new(4)).unwrap().is_none());
    }

    #[test]
    fn test_find_by_id_e_present_and_absent() {
        let repo = setup_repo();

        let job = repo.find_by_id_e(JobId::new(2)).unwrap();
        assert_eq!(job, JobStore::seeded().all()[1]);

        assert_eq!(
            repo.find_by_id_e(JobId::new(4)),
            Err(JobError::NotFound(JobId::new(4)))
        );
    }

    #[test]
    fn test_find_all_is_idempotent() {
        let repo = setup_repo();

        let first = repo.find_all().unwrap();
        let second = repo.find_all().unwrap();
        let typed = repo.find_all_e().unwrap();

        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
        assert_eq!(first, typed);
    }
}
