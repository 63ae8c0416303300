use std::io::Write;
use std::time::Instant;

use rand::Rng;
use stopwatch::{HeapProbe, MemoryProbe, Sample, Stopwatch};
use tracing::{Level, debug, info};
use wordgen::generate_with;

use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::phase::{Sink, as_collector, as_for_each};
use crate::report::{ReportFormat, completion_line, phase_line};
use crate::variant::{Phase, TestKind};

/// What a finished run leaves behind besides its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub trials_run: u32,
    /// Final value of the result-length counter.
    pub secret: u64,
    /// Last collect sample, `None` if that phase never ran.
    pub collector: Option<Sample>,
    /// Last for-each sample, `None` if that phase never ran.
    pub for_each: Option<Sample>,
}

/// Owns the per-phase stopwatches and the shared counter for a whole run.
///
/// Both stopwatches live as long as the harness, so each trial overwrites the
/// previous trial's sample. Lines are written to `out` as trials finish.
pub struct Harness<W, P = HeapProbe> {
    out: W,
    reps: i32,
    format: ReportFormat,
    collector: Stopwatch<P>,
    for_each: Stopwatch<P>,
    sink: Sink,
}

impl<W: Write> Harness<W, HeapProbe> {
    pub fn new(out: W, reps: i32, format: ReportFormat) -> Self {
        Self::with_probe(out, reps, format, HeapProbe)
    }
}

impl<W: Write, P: MemoryProbe + Clone> Harness<W, P> {
    pub fn with_probe(out: W, reps: i32, format: ReportFormat, probe: P) -> Self {
        Self {
            out,
            reps,
            format,
            collector: Stopwatch::with_probe(probe.clone()),
            for_each: Stopwatch::with_probe(probe),
            sink: Sink::new(),
        }
    }

    /// Time every phase of `kind` over `source`, then report them in order.
    pub fn run_trial<T>(&mut self, kind: TestKind, source: &[T]) -> Result<(), BenchError> {
        for &phase in kind.phases() {
            self.time_phase(phase, source);
        }

        if self.format == ReportFormat::Stats {
            writeln!(self.out, "{}", completion_line(self.reps, self.sink.total()))?;
        }
        for &phase in kind.phases() {
            let line = phase_line(phase, self.stopwatch(phase), self.format);
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn time_phase<T>(&mut self, phase: Phase, source: &[T]) {
        let reps = self.reps;
        let sink = &mut self.sink;
        let watch = match phase {
            Phase::Collector => {
                self.collector.time(|| as_collector(source, reps, sink));
                &self.collector
            }
            Phase::ForEach => {
                self.for_each.time(|| as_for_each(source, reps, sink));
                &self.for_each
            }
        };
        debug!(
            phase = %phase,
            elapsed_nanos = watch.elapsed_nanos(),
            "phase_timed"
        );
    }

    pub fn stopwatch(&self, phase: Phase) -> &Stopwatch<P> {
        match phase {
            Phase::Collector => &self.collector,
            Phase::ForEach => &self.for_each,
        }
    }

    pub fn secret(&self) -> u64 {
        self.sink.total()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Run the configured benchmark with the thread RNG, writing the report to `out`.
pub fn run<W: Write>(config: &BenchConfig, out: W) -> Result<RunSummary, BenchError> {
    run_with_rng(config, &mut rand::rng(), out)
}

/// Same as [`run`], drawing the source words from `rng`.
pub fn run_with_rng<W: Write, R: Rng>(
    config: &BenchConfig,
    rng: &mut R,
    mut out: W,
) -> Result<RunSummary, BenchError> {
    let kind = config.test_kind();
    if TestKind::lookup(&config.kind).is_none() {
        debug!(kind = %config.kind, fallback = %kind, "unknown_test_kind");
    }
    info!(
        kind = %kind,
        reps = config.reps,
        source_size = config.source_size,
        trials = config.trials,
        word_min = config.word_min,
        word_max = config.word_max,
        "bench_start"
    );

    writeln!(out, "{}", config.description())?;

    let start = Instant::now();
    let source = generate_with(rng, &config.source_config(), config.source_size);
    debug!(
        count = source.len(),
        elapsed_micros = start.elapsed().as_micros(),
        "source_generated"
    );

    let mut harness = Harness::new(out, config.reps, config.format);
    let mut trials_run = 0u32;
    for trial in 0..config.trials.max(0) {
        let span = tracing::span!(Level::DEBUG, "bench.trial", trial);
        let _guard = span.enter();
        harness.run_trial(kind, &source)?;
        trials_run += 1;
    }

    let secret = harness.secret();
    let last_sample = |phase: Phase| {
        (trials_run > 0 && kind.phases().contains(&phase))
            .then(|| harness.stopwatch(phase).sample())
    };
    let summary = RunSummary {
        trials_run,
        secret,
        collector: last_sample(Phase::Collector),
        for_each: last_sample(Phase::ForEach),
    };
    harness.into_inner().flush()?;
    info!(trials_run, secret, "bench_complete");

    Ok(summary)
}
