// Seed dataset (built-in records or a JSON seed file)

use jobdesk_core::domain::{Company, Job, JobId, Role, Salary};
use jobdesk_core::error::Result;
use std::path::Path;
use tracing::info;

/// Built-in dataset: three records with salaries 70k, 80k and 90k
pub fn default_jobs() -> Vec<Job> {
    vec![
        Job::new(
            JobId::new(1),
            Company::new("Sunny Inc."),
            Role::new("Software Engineer"),
            Salary::new(70_000.0),
        ),
        Job::new(
            JobId::new(2),
            Company::new("Foggy Ltd."),
            Role::new("Senior Software Engineer"),
            Salary::new(80_000.0),
        ),
        Job::new(
            JobId::new(3),
            Company::new("Rainy GmbH"),
            Role::new("Staff Engineer"),
            Salary::new(90_000.0),
        ),
    ]
}

/// Parse a JSON array of jobs
///
/// ```text
/// [{"id": 1, "company": "Sunny Inc.", "role": "Software Engineer", "salary": 70000.0}]
/// ```
pub fn parse_seed(json: &str) -> Result<Vec<Job>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a JSON seed file
pub fn load_seed_file(path: &Path) -> Result<Vec<Job>> {
    let contents = std::fs::read_to_string(path)?;
    let jobs = parse_seed(&contents)?;

    info!(path = %path.display(), jobs = jobs.len(), "Loaded seed file");
    Ok(jobs)
}
