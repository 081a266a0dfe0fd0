//! Latency statistics reduction for breadcrumb timing samples

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

/// Summary statistics over an ordered set of latency samples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencySummary {
    /// The first measured sample, in milliseconds
    pub first_ms: f64,

    /// Arithmetic mean of all samples, in milliseconds
    pub avg_ms: f64,

    /// 95th-percentile sample (nearest rank on the sorted list), in milliseconds
    pub p95_ms: f64,

    /// Number of samples included
    pub sample_count: usize,
}

impl LatencySummary {
    /// Reduce an ordered sample set into first / mean / p95
    ///
    /// Samples must be in measurement order; `first_ms` is the sample at
    /// index 0, not the minimum.
    pub fn from_samples(samples_ms: &[f64]) -> Result<Self> {
        if samples_ms.is_empty() {
            return Err(AppError::statistics(
                "cannot summarize an empty sample set",
            ));
        }

        let first_ms = samples_ms[0];
        let avg_ms = samples_ms.iter().sum::<f64>() / samples_ms.len() as f64;
        let p95_ms = nearest_rank_p95(samples_ms);

        Ok(Self {
            first_ms,
            avg_ms,
            p95_ms,
            sample_count: samples_ms.len(),
        })
    }
}

/// Nearest-rank 95th percentile: index = ceil(0.95 * count) - 1 on the
/// ascending-sorted sample list, clamped to index 0 for a single sample.
fn nearest_rank_p95(samples_ms: &[f64]) -> f64 {
    let mut sorted = samples_ms.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let count = sorted.len();
    let rank = (0.95 * count as f64).ceil() as usize;
    let index = rank.saturating_sub(1).min(count - 1);
    sorted[index]
}
