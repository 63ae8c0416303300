//! Stopwatch for micro-benchmarks.
//!
//! Wraps a block with a monotonic clock reading and a memory snapshot on each
//! side. Memory figures come from a [`MemoryProbe`]; the default
//! [`HeapProbe`] reads the counters kept by [`TrackingAllocator`], which the
//! binary installs as its global allocator.
//!
//! The figures are coarse and environment dependent. Only their presence in
//! a report is meaningful, never their exact value.

mod alloc;
mod probe;
mod watch;

pub use crate::alloc::{HeapUsage, TrackingAllocator, heap_usage};
pub use crate::probe::{HeapProbe, MemoryProbe, MemorySnapshot};
pub use crate::watch::{Sample, Stopwatch};
