//! Breadcrumb API Benchmark
//!
//! A benchmarking client for a file-management API: it registers a throwaway
//! user, builds a deep chain of nested directories, then repeatedly times the
//! breadcrumb (path-from-root) lookup for the deepest directory and reports
//! first-call, average, and p95 latency.

pub mod cli;
pub mod client;
pub mod error;
pub mod models;
pub mod output;
pub mod runner;
pub mod stats;

// Re-export commonly used types
pub use client::ApiClient;
pub use error::{AppError, Result};
pub use models::{BenchmarkReport, Config, Credentials};
pub use output::ReportFormatter;
pub use runner::BenchmarkRunner;
pub use stats::LatencySummary;

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
    pub const DEFAULT_DEPTH: u32 = 200;
    pub const DEFAULT_REPEATS: u32 = 5;
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
    /// How often the chain builder prints a progress line
    pub const PROGRESS_INTERVAL: u32 = 50;
}
