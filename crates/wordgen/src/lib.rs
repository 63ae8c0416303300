//! Random word lists used as benchmark input.
//!
//! Each word's length is drawn uniformly from `[word_min, word_max)` and each
//! character uniformly from an [`Alphabet`]. The default alphabet reproduces
//! the historical 61-character set (no lowercase `w`); see
//! [`LEGACY_WORD_CHARS`].
//!
//! [`generate`] uses the unseeded thread RNG, so lists differ between runs.
//! [`generate_with`] takes any [`rand::Rng`] for reproducible fixtures.

mod alphabet;
mod generate;

pub use crate::alphabet::{Alphabet, FULL_WORD_CHARS, LEGACY_WORD_CHARS};
pub use crate::generate::{SourceConfig, generate, generate_with};
