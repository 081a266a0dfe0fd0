//! Report formatting for console output

use crate::models::BenchmarkReport;
use colored::Colorize;

/// Formats benchmark reports, with or without color codes
///
/// Plain and colored output carry identical text; color only decorates it,
/// so scripts can parse the `key=value` result lines either way.
pub struct ReportFormatter {
    use_color: bool,
}

impl ReportFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Render the final result lines
    pub fn format_report(&self, report: &BenchmarkReport, verbose: bool) -> String {
        let mut out = String::new();

        if verbose {
            out.push_str(&self.format_context(report));
        }

        out.push_str(&self.result_line("first_call_ms", report.summary.first_ms));
        out.push('\n');
        out.push_str(&self.result_line("avg_ms", report.summary.avg_ms));
        out.push('\n');
        out.push_str(&self.result_line("p95_ms", report.summary.p95_ms));

        out
    }

    fn format_context(&self, report: &BenchmarkReport) -> String {
        let header = format!(
            "breadcrumb latency (depth={}, repeats={}, uuid={}, generated_at={})",
            report.depth,
            report.repeats,
            report.deepest_uuid,
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        );

        if self.use_color {
            format!("{}\n", header.bold())
        } else {
            format!("{}\n", header)
        }
    }

    fn result_line(&self, key: &str, value_ms: f64) -> String {
        let value = format!("{:.2}", value_ms);
        if self.use_color {
            format!("{}={}", key.cyan(), value.green().bold())
        } else {
            format!("{}={}", key, value)
        }
    }
}
