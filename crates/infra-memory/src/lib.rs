// jobdesk Infrastructure - In-Memory Adapter
// Implements: Jobs over an immutable record store loaded once at start-up

mod jobs;
mod seed;
mod store;

pub use jobs::InMemoryJobs;
pub use seed::{default_jobs, load_seed_file, parse_seed};
pub use store::JobStore;
