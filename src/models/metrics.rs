//! Benchmark result data models

use crate::stats::LatencySummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete result of a benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// UUID of the deepest directory whose breadcrumb was measured
    pub deepest_uuid: String,

    /// Directory chain depth that was constructed
    pub depth: u32,

    /// Number of timed breadcrumb calls (warm-up excluded)
    pub repeats: u32,

    /// Latency reduction of the timed calls
    pub summary: LatencySummary,

    /// When the report was generated
    pub generated_at: DateTime<Utc>,
}

impl BenchmarkReport {
    pub fn new(deepest_uuid: String, depth: u32, repeats: u32, summary: LatencySummary) -> Self {
        Self {
            deepest_uuid,
            depth,
            repeats,
            summary,
            generated_at: Utc::now(),
        }
    }
}
