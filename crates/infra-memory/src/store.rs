// Record Store - immutable id -> job mapping

use jobdesk_core::domain::{Job, JobId};
use jobdesk_core::error::{AppError, Result};
use std::collections::HashMap;

/// Immutable job records, kept in insertion order with an id index
#[derive(Debug, Clone)]
pub struct JobStore {
    jobs: Vec<Job>,
    index: HashMap<JobId, usize>,
}

impl JobStore {
    /// Build a store from `jobs`, rejecting duplicate ids
    pub fn new(jobs: Vec<Job>) -> Result<Self> {
        let mut index = HashMap::with_capacity(jobs.len());
        for (position, job) in jobs.iter().enumerate() {
            if index.insert(job.id, position).is_some() {
                return Err(AppError::Validation(format!(
                    "duplicate job id in seed: {}",
                    job.id
                )));
            }
        }

        Ok(Self { jobs, index })
    }

    /// Store holding the built-in three-record dataset
    pub fn seeded() -> Self {
        let jobs = crate::default_jobs();
        let index = jobs
            .iter()
            .enumerate()
            .map(|(position, job)| (job.id, position))
            .collect();
        Self { jobs, index }
    }

    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.index.get(&id).and_then(|&position| self.jobs.get(position))
    }

    pub fn all(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
