//! Data models for configuration and benchmark results

pub mod config;
pub mod metrics;

pub use config::{Config, Credentials};
pub use metrics::BenchmarkReport;
