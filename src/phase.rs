//! The two copy strategies and the counter that keeps them honest.
//!
//! Both strategies produce a `Vec<&T>` holding the source elements in source
//! order; they differ only in how the vector is built. Every result's length
//! is fed into a [`Sink`] and passed through [`black_box`] so the optimizer
//! cannot drop the work.

use std::hint::black_box;

/// Running total of result lengths. Grows for the life of the harness and is
/// never reset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sink {
    total: u64,
}

impl Sink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn absorb<T>(&mut self, result: &[T]) {
        self.total = self.total.wrapping_add(black_box(result.len()) as u64);
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

/// Bulk copy: one `collect` over the source.
pub fn collect_copy<T>(source: &[T]) -> Vec<&T> {
    source.iter().collect()
}

/// Per-element copy: a pre-sized vector filled from a `for_each` callback.
pub fn for_each_copy<T>(source: &[T]) -> Vec<&T> {
    let mut result = Vec::with_capacity(source.len());
    source.iter().for_each(|item| result.push(item));
    result
}

/// Run [`collect_copy`] `reps` times. Non-positive `reps` does nothing.
pub fn as_collector<T>(source: &[T], reps: i32, sink: &mut Sink) {
    for _ in 0..reps.max(0) {
        let result = collect_copy(black_box(source));
        sink.absorb(&result);
    }
}

/// Run [`for_each_copy`] `reps` times. Non-positive `reps` does nothing.
pub fn as_for_each<T>(source: &[T], reps: i32, sink: &mut Sink) {
    for _ in 0..reps.max(0) {
        let result = for_each_copy(black_box(source));
        sink.absorb(&result);
    }
}
