//! CLI output formatting and the JSON report.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use algolab_core::complexity::Complexity;
use algolab_orchestration::benchmark::Timing;
use algolab_orchestration::interfaces::CalculationResult;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a sequence as `[a, b, c]`.
#[must_use]
pub fn format_sequence<T: Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

/// Machine-readable summary of a run, written with `--output`.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fibonacci: Option<FibonacciReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quicksort: Option<SortReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<BenchmarkReport>,
}

#[derive(Debug, Serialize)]
pub struct FibonacciReport {
    pub n: i64,
    pub results: Vec<ResultEntry>,
}

#[derive(Debug, Serialize)]
pub struct ResultEntry {
    pub algorithm: String,
    pub complexity: Complexity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub duration_ns: u64,
}

impl From<&CalculationResult> for ResultEntry {
    fn from(result: &CalculationResult) -> Self {
        Self {
            algorithm: result.algorithm.clone(),
            complexity: result.complexity,
            value: result.value(),
            error: result.outcome.as_ref().err().map(ToString::to_string),
            duration_ns: duration_ns(result.duration),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SortReport {
    pub input: Vec<i64>,
    pub sorted: Vec<i64>,
    pub comparisons: u64,
    pub swaps: u64,
}

#[derive(Debug, Serialize)]
pub struct BenchmarkReport {
    pub size: usize,
    pub seed: u64,
    pub timings: Vec<TimingEntry>,
}

#[derive(Debug, Serialize)]
pub struct TimingEntry {
    pub algorithm: &'static str,
    pub complexity: Complexity,
    pub duration_ns: u64,
}

impl From<&Timing> for TimingEntry {
    fn from(timing: &Timing) -> Self {
        Self {
            algorithm: timing.algorithm,
            complexity: timing.complexity,
            duration_ns: duration_ns(timing.duration),
        }
    }
}

fn duration_ns(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

/// Write the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_report(path: impl AsRef<Path>, report: &Report) -> io::Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), "writing report");
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()
}
