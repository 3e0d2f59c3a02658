//! Console rendering of lookup outcomes

use colored::Colorize;
use jobdesk_core::domain::{Job, JobId};
use jobdesk_core::port::JobOutput;

/// Writes lookup outcomes to stdout
pub struct ConsoleOutput;

impl JobOutput for ConsoleOutput {
    fn job(&self, job: &Job) {
        println!("{} {}", "✓".green(), job);
    }

    fn not_found(&self, id: JobId) {
        println!("{} Job #{} not found", "∅".yellow(), id);
    }

    fn failure(&self, error: &anyhow::Error) {
        println!("{} Lookup failed: {}", "✗".red(), error);
    }
}
