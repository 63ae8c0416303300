//! Positional command line parsing.
//!
//! `streamdemo [kind] [reps] [sourceSize] [trials] [wordMin] [wordMax]`
//!
//! Every position is optional. Parsing stops at the first missing argument,
//! so everything after it keeps its default. Extra arguments are ignored.

use crate::config::{
    BenchConfig, default_kind, default_reps, default_source_size, default_trials,
    default_word_max, default_word_min,
};
use crate::error::CliError;

/// Build a [`BenchConfig`] from arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<BenchConfig, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = Positional::new(args.into_iter().map(Into::into));

    let kind = args.next_text().unwrap_or_else(default_kind);
    let reps = args.next_int("reps")?.unwrap_or_else(default_reps);
    let source_size = args
        .next_int("source_size")?
        .unwrap_or_else(default_source_size);
    let trials = args.next_int("trials")?.unwrap_or_else(default_trials);
    let word_min = args.next_int("word_min")?.unwrap_or_else(default_word_min);
    let word_max = args.next_int("word_max")?.unwrap_or_else(default_word_max);

    Ok(BenchConfig {
        kind,
        reps,
        source_size,
        trials,
        word_min,
        word_max,
        ..Default::default()
    })
}

struct Positional<I> {
    args: I,
    position: usize,
}

impl<I: Iterator<Item = String>> Positional<I> {
    fn new(args: I) -> Self {
        Self { args, position: 0 }
    }

    fn next_text(&mut self) -> Option<String> {
        let value = self.args.next()?;
        self.position += 1;
        Some(value)
    }

    fn next_int(&mut self, field: &'static str) -> Result<Option<i32>, CliError> {
        let Some(value) = self.next_text() else {
            return Ok(None);
        };
        match value.parse::<i32>() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(source) => Err(CliError::InvalidInteger {
                position: self.position,
                field,
                value,
                source,
            }),
        }
    }
}
