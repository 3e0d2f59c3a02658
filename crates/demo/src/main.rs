//! jobdesk - Demonstration Driver
//! Wires the in-memory store into the job service and prints every query outcome

mod console;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobdesk_core::application::{CurrencyConverter, JobService, DEFAULT_EUR_RATE};
use jobdesk_core::domain::JobId;
use jobdesk_infra_memory::{default_jobs, load_seed_file, InMemoryJobs, JobStore};

use crate::console::ConsoleOutput;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "jobdesk")]
#[command(about = "Job lookup service demonstration", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON seed file replacing the built-in dataset
    #[arg(long, env = "JOBDESK_SEED_PATH")]
    seed: Option<String>,

    /// Fixed USD -> EUR conversion rate
    #[arg(long, env = "JOBDESK_EUR_RATE", default_value_t = DEFAULT_EUR_RATE)]
    eur_rate: f64,

    /// Job queried by every operation
    #[arg(long, env = "JOBDESK_JOB_ID", default_value_t = 2)]
    job_id: u32,

    /// Job expected to be absent from the dataset
    #[arg(long, env = "JOBDESK_MISSING_ID", default_value_t = 42)]
    missing_id: u32,
}

fn main() -> Result<()> {
    // 1. Initialize logging (JSON or pretty, on stderr to keep stdout for results)
    let log_format = std::env::var("JOBDESK_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("jobdesk=info"))
        .context("Failed to create env filter")?;

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }

    info!("jobdesk v{} starting...", VERSION);

    // 2. Load configuration
    let cli = Cli::parse();

    // 3. Build the record store (once, read-only from here on)
    let jobs = match &cli.seed {
        Some(path) => {
            let path = PathBuf::from(shellexpand::tilde(path).into_owned());
            load_seed_file(&path)
                .with_context(|| format!("Failed to load seed file {}", path.display()))?
        }
        None => default_jobs(),
    };
    let store = Arc::new(JobStore::new(jobs).context("Invalid seed dataset")?);
    info!(jobs = store.len(), "Record store ready");

    // 4. Setup dependencies (DI wiring)
    let converter = CurrencyConverter::with_rate(cli.eur_rate)?;
    let service = JobService::new(Arc::new(InMemoryJobs::new(store)), converter);

    let target = JobId::new(cli.job_id);
    let missing = JobId::new(cli.missing_id);

    // 5. Exercise every query
    section("Print if found");
    service.maybe_print_job(target, &ConsoleOutput);
    service.maybe_print_job(missing, &ConsoleOutput);

    section("Salary in EUR");
    report(
        &format!("salary of #{} in EUR", target),
        service.get_salary_in_eur(target),
    );
    report(
        &format!("salary of #{} in EUR", missing),
        service.get_salary_in_eur(missing),
    );
    report(
        &format!("salary of #{} in EUR (recovered)", missing),
        service.get_salary_in_eur_or_zero(missing),
    );
    report("converting -5.0 to EUR", converter.convert_to_eur(Some(-5.0)));

    section("Salary gap vs max salary");
    for id in [target, missing] {
        report(
            &format!("gap for #{}", id),
            service.get_salary_gap_vs_max_salary(id),
        );
        report(
            &format!("gap for #{} (eager)", id),
            service.get_salary_gap_vs_max_salary_eager(id),
        );
        report(
            &format!("gap for #{} (typed)", id),
            service.get_salary_gap_vs_max_salary_e(id),
        );
    }

    Ok(())
}

fn section(title: &str) {
    println!();
    println!("{}", title.bold());
}

fn report<E: Display>(label: &str, result: std::result::Result<f64, E>) {
    match result {
        Ok(value) => println!("  {} {}: {:.2}", "✓".green(), label, value),
        Err(e) => println!("  {} {}: {}", "✗".red(), label, e),
    }
}
