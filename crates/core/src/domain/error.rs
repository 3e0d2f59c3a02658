// Domain Error Types

use crate::domain::JobId;
use thiserror::Error;

/// Closed error set of the discriminated result channel
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobError {
    #[error("Job not found: {0}")]
    NotFound(JobId),

    #[error("{0}")]
    Generic(String),
}

/// Raised by the currency converter on unusable input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Raised by the opaque-channel salary aggregation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregationError {
    #[error("Collection contains no elements")]
    NoElements,
}

pub type Result<T> = std::result::Result<T, JobError>;
