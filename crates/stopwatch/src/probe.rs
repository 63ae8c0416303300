use serde::{Deserialize, Serialize};

use crate::alloc::heap_usage;

/// Coarse memory figures captured around a timed block.
///
/// `total` is the heap size reached so far and `free` is the part of it not
/// currently in use, mirroring the total/free pair a managed runtime reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySnapshot {
    pub total: u64,
    pub free: u64,
}

impl MemorySnapshot {
    /// Bytes in use at the time of the snapshot.
    pub fn used(&self) -> u64 {
        self.total.saturating_sub(self.free)
    }
}

/// Source of memory snapshots for a [`Stopwatch`](crate::Stopwatch).
pub trait MemoryProbe {
    fn snapshot(&self) -> MemorySnapshot;
}

/// Reads the counters maintained by [`TrackingAllocator`](crate::TrackingAllocator).
///
/// `total` is the peak of live heap bytes, `free` is `peak - live`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapProbe;

impl MemoryProbe for HeapProbe {
    fn snapshot(&self) -> MemorySnapshot {
        let usage = heap_usage();
        let total = usage.peak_bytes as u64;
        let live = usage.live_bytes as u64;
        MemorySnapshot {
            total,
            free: total.saturating_sub(live),
        }
    }
}

impl<P: MemoryProbe + ?Sized> MemoryProbe for &P {
    fn snapshot(&self) -> MemorySnapshot {
        (**self).snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_probe_free_never_exceeds_total() {
        let snap = HeapProbe.snapshot();
        assert!(snap.free <= snap.total);
        assert_eq!(snap.used() + snap.free, snap.total);
    }

    #[test]
    fn used_saturates() {
        let snap = MemorySnapshot { total: 4, free: 9 };
        assert_eq!(snap.used(), 0);
    }
}
