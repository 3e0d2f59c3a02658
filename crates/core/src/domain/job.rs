// Job Domain Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Job identifier (lookup key of the record store)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(u32);

impl JobId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hiring company label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Company(String);

impl Company {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Role title label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Yearly salary amount.
///
/// Negative amounts are representable; only the currency converter rejects them.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Salary(f64);

impl Salary {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Job Entity (immutable once loaded into the store)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub company: Company,
    pub role: Role,
    pub salary: Salary,
}

impl Job {
    pub fn new(id: JobId, company: Company, role: Role, salary: Salary) -> Self {
        Self {
            id,
            company,
            role,
            salary,
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Job #{} - {} at {} ({})",
            self.id,
            self.role.as_str(),
            self.company.as_str(),
            self.salary
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> Job {
        Job::new(
            JobId::new(7),
            Company::new("Acme"),
            Role::new("Engineer"),
            Salary::new(1234.5),
        )
    }

    #[test]
    fn test_salary_ordering_by_value() {
        assert!(Salary::new(80_000.0) > Salary::new(70_000.0));
        assert!(Salary::new(-1.0) < Salary::new(0.0));
        assert_eq!(Salary::new(5.0), Salary::new(5.0));
    }

    #[test]
    fn test_job_display() {
        assert_eq!(
            sample_job().to_string(),
            "Job #7 - Engineer at Acme (1234.50)"
        );
    }

    #[test]
    fn test_job_serde_is_transparent() {
        let value = serde_json::to_value(sample_job()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "company": "Acme",
                "role": "Engineer",
                "salary": 1234.5
            })
        );

        let back: Job = serde_json::from_value(value).unwrap();
        assert_eq!(back, sample_job());
    }
}
