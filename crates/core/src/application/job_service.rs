// Job Service - Business queries over the Jobs repository

use crate::application::aggregation::{max_salary, max_salary_e};
use crate::application::converter::CurrencyConverter;
use crate::domain::{error, ConversionError, JobId};
use crate::port::{JobOutput, Jobs};
use std::sync::Arc;
use tracing::{debug, warn};

/// Job Service
///
/// Every query exists on the opaque channel (`anyhow::Result`) and, where the
/// typed channel differs in policy, as an `_e` variant returning
/// [`JobError`](crate::domain::JobError).
pub struct JobService {
    jobs: Arc<dyn Jobs>,
    converter: CurrencyConverter,
}

impl JobService {
    pub fn new(jobs: Arc<dyn Jobs>, converter: CurrencyConverter) -> Self {
        Self { jobs, converter }
    }

    /// Report the job stored under `id` to `output`
    ///
    /// Absence and lookup faults are reported too; nothing is returned.
    pub fn maybe_print_job(&self, id: JobId, output: &dyn JobOutput) {
        match self.jobs.find_by_id(id) {
            Ok(Some(job)) => output.job(&job),
            Ok(None) => output.not_found(id),
            Err(e) => {
                warn!(job_id = %id, error = %e, "Job lookup failed");
                output.failure(&e);
            }
        }
    }

    /// Salary of job `id` converted to EUR
    ///
    /// Lookup failures propagate unchanged. An absent job has no amount, so
    /// the converter rejects it with `InvalidArgument`.
    pub fn get_salary_in_eur(&self, id: JobId) -> anyhow::Result<f64> {
        self.jobs
            .find_by_id(id)
            .map(|job| job.map(|job| job.salary.value()))
            .and_then(|amount| {
                self.converter
                    .convert_to_eur(amount)
                    .map_err(anyhow::Error::from)
            })
    }

    /// [`Self::get_salary_in_eur`], substituting `0.0` for invalid arguments
    ///
    /// Any other failure cause is propagated untouched.
    pub fn get_salary_in_eur_or_zero(&self, id: JobId) -> anyhow::Result<f64> {
        self.get_salary_in_eur(id)
            .or_else(|e| match e.downcast_ref::<ConversionError>() {
                Some(ConversionError::InvalidArgument(reason)) => {
                    warn!(job_id = %id, reason = %reason, "Salary not convertible, using 0.0");
                    Ok(0.0)
                }
                None => Err(e),
            })
    }

    /// Gap between the highest salary and the salary of job `id`
    ///
    /// A missing job counts as salary 0.
    pub fn get_salary_gap_vs_max_salary(&self, id: JobId) -> anyhow::Result<f64> {
        self.jobs
            .find_by_id(id)
            .map(|job| job.map_or(0.0, |job| job.salary.value()))
            .and_then(|target| {
                self.jobs
                    .find_all()
                    .and_then(|jobs| max_salary(&jobs))
                    .map(|max| max.value() - target)
            })
    }

    /// Same contract as [`Self::get_salary_gap_vs_max_salary`], unwrapping
    /// each intermediate result as soon as it is produced.
    pub fn get_salary_gap_vs_max_salary_eager(&self, id: JobId) -> anyhow::Result<f64> {
        let job = self.jobs.find_by_id(id)?;
        let target = job.map_or(0.0, |job| job.salary.value());
        let jobs = self.jobs.find_all()?;
        let max = max_salary(&jobs)?;

        debug!(job_id = %id, max = %max, target = %target, "Computed salary gap");
        Ok(max.value() - target)
    }

    /// Gap between the highest salary and the salary of job `id`
    ///
    /// Unlike [`Self::get_salary_gap_vs_max_salary`], a missing job is a
    /// `NotFound` failure rather than salary 0.
    pub fn get_salary_gap_vs_max_salary_e(&self, id: JobId) -> error::Result<f64> {
        self.jobs.find_by_id_e(id).and_then(|job| {
            self.jobs
                .find_all_e()
                .and_then(|jobs| max_salary_e(&jobs))
                .map(|max| max.value() - job.salary.value())
        })
    }
}

#[cfg(test)]
#[path = "job_service_test.rs"]
mod job_service_test;
