// Salary aggregation over job collections

use crate::domain::{error, AggregationError, Job, JobError, Salary};

/// Highest salary in `jobs`; the first job seen wins ties.
///
/// Empty input fails with [`AggregationError::NoElements`] as the opaque cause.
pub fn max_salary(jobs: &[Job]) -> anyhow::Result<Salary> {
    highest(jobs).ok_or_else(|| AggregationError::NoElements.into())
}

/// Highest salary in `jobs`, reporting empty input as `Generic`
pub fn max_salary_e(jobs: &[Job]) -> error::Result<Salary> {
    highest(jobs).ok_or_else(|| JobError::Generic("No jobs present".to_string()))
}

fn highest(jobs: &[Job]) -> Option<Salary> {
    jobs.iter().map(|job| job.salary).fold(None, |best, salary| match best {
        Some(current) if salary <= current => Some(current),
        _ => Some(salary),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Company, JobId, Role};

    fn job(id: u32, salary: f64) -> Job {
        Job::new(
            JobId::new(id),
            Company::new(format!("company-{}", id)),
            Role::new("Engineer"),
            Salary::new(salary),
        )
    }

    #[test]
    fn test_max_salary_picks_highest() {
        let jobs = vec![job(1, 70_000.0), job(2, 90_000.0), job(3, 80_000.0)];
        assert_eq!(max_salary(&jobs).unwrap(), Salary::new(90_000.0));
        assert_eq!(max_salary_e(&jobs).unwrap(), Salary::new(90_000.0));
    }

    #[test]
    fn test_max_salary_with_ties() {
        let jobs = vec![job(1, 50.0), job(2, 90.0), job(3, 90.0)];
        assert_eq!(max_salary(&jobs).unwrap(), Salary::new(90.0));
        assert_eq!(max_salary_e(&jobs).unwrap(), Salary::new(90.0));
    }

    #[test]
    fn test_max_salary_single_negative() {
        let jobs = vec![job(1, -10.0)];
        assert_eq!(max_salary(&jobs).unwrap(), Salary::new(-10.0));
    }

    #[test]
    fn test_max_salary_empty_fails_with_no_elements() {
        let err = max_salary(&[]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<AggregationError>(),
            Some(&AggregationError::NoElements)
        );
    }

    #[test]
    fn test_max_salary_e_empty_fails_with_generic() {
        assert_eq!(
            max_salary_e(&[]),
            Err(JobError::Generic("No jobs present".to_string()))
        );
    }
}
