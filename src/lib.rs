//! Micro-benchmark comparing two ways of copying a list of strings.
//!
//! A run generates a list of random words once, then times, trial after
//! trial, a bulk `collect` copy ([`Phase::Collector`]) against a pre-sized
//! vector filled element by element ([`Phase::ForEach`]). Each timed phase
//! reports its elapsed nanoseconds and heap snapshots taken before and after.
//!
//! ```rust
//! use streamdemo::{parse_args, run};
//!
//! let cfg = parse_args(["testA", "5", "3", "2", "2", "4"]).unwrap();
//! let mut out = Vec::new();
//! let summary = run(&cfg, &mut out).unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert_eq!(text.lines().count(), 3);
//! assert_eq!(summary.trials_run, 2);
//! assert_eq!(summary.secret, 2 * 5 * 3);
//! ```
//!
//! The numbers are not statistically treated: no warm-up, no outlier
//! rejection. They are raw single samples per trial.

mod cli;
mod config;
mod error;
mod harness;
mod phase;
mod report;
mod variant;

pub use crate::cli::parse_args;
pub use crate::config::BenchConfig;
pub use crate::error::{BenchError, CliError, ConfigError};
pub use crate::harness::{Harness, RunSummary, run, run_with_rng};
pub use crate::phase::{Sink, as_collector, as_for_each, collect_copy, for_each_copy};
pub use crate::report::{ReportFormat, completion_line, phase_line};
pub use crate::variant::{Phase, TestKind};

pub use stopwatch::{MemorySnapshot, Sample, Stopwatch, TrackingAllocator};
pub use wordgen::{Alphabet, SourceConfig, generate};
