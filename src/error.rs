use std::num::ParseIntError;

use thiserror::Error;

/// Failure turning positional arguments into a [`BenchConfig`](crate::BenchConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CliError {
    #[error("argument {position} ({field}) must be an integer, got {value:?}: {source}")]
    InvalidInteger {
        position: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Rejected by the opt-in [`BenchConfig::validate`](crate::BenchConfig::validate).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must be >= 0, got {value}")]
    Negative { field: &'static str, value: i32 },

    #[error("word_min ({word_min}) must not exceed word_max ({word_max})")]
    InvertedWordRange { word_min: i32, word_max: i32 },
}

/// Errors surfaced by a benchmark run.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error(transparent)]
    Cli(#[from] CliError),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
