use std::fmt::Write as _;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::probe::{HeapProbe, MemoryProbe, MemorySnapshot};

/// Times a block and captures memory snapshots on either side of it.
///
/// A stopwatch keeps only its most recent sample: every call to
/// [`time`](Stopwatch::time) overwrites the previous one. It is meant to be
/// created once and reused, so reports always describe the last run.
///
/// A stopwatch must not be started again from inside its own timed block.
/// `time` takes `&mut self`, which already rules that out.
#[derive(Debug, Clone)]
pub struct Stopwatch<P = HeapProbe> {
    probe: P,
    started_at: Option<Instant>,
    stopped_at: Option<Instant>,
    start_mem: MemorySnapshot,
    stop_mem: MemorySnapshot,
}

/// Owned copy of a stopwatch's last measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub elapsed_nanos: u128,
    pub start_mem: MemorySnapshot,
    pub stop_mem: MemorySnapshot,
}

impl Stopwatch<HeapProbe> {
    pub fn new() -> Self {
        Self::with_probe(HeapProbe)
    }
}

impl Default for Stopwatch<HeapProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: MemoryProbe> Stopwatch<P> {
    pub fn with_probe(probe: P) -> Self {
        Self {
            probe,
            started_at: None,
            stopped_at: None,
            start_mem: MemorySnapshot::default(),
            stop_mem: MemorySnapshot::default(),
        }
    }

    /// Run `block` synchronously and record its duration and the memory
    /// figures before and after.
    pub fn time<F: FnOnce()>(&mut self, block: F) {
        self.start_mem = self.probe.snapshot();
        self.started_at = Some(Instant::now());
        block();
        self.stopped_at = Some(Instant::now());
        self.stop_mem = self.probe.snapshot();
        trace!(elapsed_nanos = self.elapsed_nanos(), "stopwatch_stopped");
    }

    /// Duration of the last timed block, zero if nothing was timed yet.
    pub fn elapsed(&self) -> Duration {
        match (self.started_at, self.stopped_at) {
            (Some(start), Some(stop)) => stop.saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }

    pub fn elapsed_nanos(&self) -> u128 {
        self.elapsed().as_nanos()
    }

    pub fn start_mem(&self) -> MemorySnapshot {
        self.start_mem
    }

    pub fn stop_mem(&self) -> MemorySnapshot {
        self.stop_mem
    }

    pub fn sample(&self) -> Sample {
        Sample {
            elapsed_nanos: self.elapsed_nanos(),
            start_mem: self.start_mem,
            stop_mem: self.stop_mem,
        }
    }

    /// `elapsed, start_total, start_free, stop_total, stop_free`
    pub fn report_csv(&self) -> String {
        let mut out = String::with_capacity(64);
        let _ = write!(
            out,
            "{}, {}, {}, {}, {}",
            self.elapsed_nanos(),
            self.start_mem.total,
            self.start_mem.free,
            self.stop_mem.total,
            self.stop_mem.free
        );
        out
    }

    /// Same figures as [`report_csv`](Stopwatch::report_csv), labeled.
    pub fn report_stats(&self) -> String {
        let mut out = String::with_capacity(96);
        let _ = write!(
            out,
            "nano-duration {} start-mem {} start-free {} stop-mem {} stop-free {}",
            self.elapsed_nanos(),
            self.start_mem.total,
            self.start_mem.free,
            self.stop_mem.total,
            self.stop_mem.free
        );
        out
    }
}
