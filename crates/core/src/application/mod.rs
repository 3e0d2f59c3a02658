// Application Layer - Use Cases and Business Logic

pub mod aggregation;
pub mod converter;
pub mod job_service;

// Re-exports
pub use aggregation::{max_salary, max_salary_e};
pub use converter::{CurrencyConverter, DEFAULT_EUR_RATE};
pub use job_service::JobService;
