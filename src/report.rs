use serde::{Deserialize, Serialize};
use stopwatch::{MemoryProbe, Stopwatch};

use crate::variant::Phase;

/// How per-phase stats are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// `label, elapsed, start_total, start_free, stop_total, stop_free`
    #[default]
    Csv,
    /// Labeled fields, preceded by a completion line per trial.
    Stats,
}

/// One report line for `phase`, without the trailing newline.
pub fn phase_line<P: MemoryProbe>(
    phase: Phase,
    watch: &Stopwatch<P>,
    format: ReportFormat,
) -> String {
    let body = match format {
        ReportFormat::Csv => watch.report_csv(),
        ReportFormat::Stats => watch.report_stats(),
    };
    format!("{}, {}", phase.label(), body)
}

/// Printed ahead of the stats lines in [`ReportFormat::Stats`] mode.
pub fn completion_line(reps: i32, secret: u64) -> String {
    format!("Test completed {reps} reps, secret {secret}.")
}
