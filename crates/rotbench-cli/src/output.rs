//! CLI output formatting.

use std::time::Duration;

use rotbench_orchestration::interfaces::{BenchmarkReport, Speedup};

/// Space-separated elements, as printed in previews.
#[must_use]
pub fn format_preview(elements: &[i32]) -> String {
    elements
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Milliseconds with three decimals.
#[must_use]
pub fn format_millis(d: Duration) -> String {
    format!("{:.3}", d.as_secs_f64() * 1000.0)
}

/// Speedup as `<ratio>x` with two decimals.
#[must_use]
pub fn format_speedup(speedup: Speedup) -> String {
    match speedup {
        Speedup::Ratio(r) => format!("{r:.2}x"),
        Speedup::Undefined => "undefined (parallel run below timer resolution)".to_string(),
    }
}

/// Pretty-printed JSON for a full report.
pub fn format_report_json(report: &BenchmarkReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
