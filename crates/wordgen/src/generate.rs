use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;

/// Shape of the generated words.
///
/// Word lengths are drawn from `[word_min, word_max)`. An inverted or
/// negative range is not rejected: lengths that come out non-positive yield
/// empty words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_word_min")]
    pub word_min: i32,

    #[serde(default = "default_word_max")]
    pub word_max: i32,

    #[serde(default)]
    pub alphabet: Alphabet,
}

impl SourceConfig {
    pub fn new(word_min: i32, word_max: i32) -> Self {
        Self {
            word_min,
            word_max,
            alphabet: Alphabet::default(),
        }
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::new(default_word_min(), default_word_max())
    }
}

fn default_word_min() -> i32 {
    8
}

fn default_word_max() -> i32 {
    15
}

/// Generate `source_size` random words with the thread-local RNG.
pub fn generate(source_size: i32, word_min: i32, word_max: i32) -> Vec<String> {
    generate_with(
        &mut rand::rng(),
        &SourceConfig::new(word_min, word_max),
        source_size,
    )
}

/// Generate `source_size` random words from `rng`. Non-positive sizes give an
/// empty list.
pub fn generate_with<R: Rng>(
    rng: &mut R,
    cfg: &SourceConfig,
    source_size: i32,
) -> Vec<String> {
    let count = usize::try_from(source_size).unwrap_or(0);
    let chars = cfg.alphabet.chars();
    let mut words = Vec::with_capacity(count);
    for _ in 0..count {
        let len = word_len(rng, cfg.word_min, cfg.word_max);
        words.push(random_word(rng, chars, len));
    }
    words
}

/// `word_min + trunc((word_max - word_min) * u)`, `u` uniform in `[0, 1)`.
fn word_len<R: Rng>(rng: &mut R, word_min: i32, word_max: i32) -> usize {
    let range = i64::from(word_max) - i64::from(word_min);
    // `as` truncates toward zero, which keeps the upper bound exclusive.
    let offset = (range as f64 * rng.random::<f64>()) as i64;
    usize::try_from(i64::from(word_min) + offset).unwrap_or(0)
}

fn random_word<R: Rng>(rng: &mut R, chars: &[u8], len: usize) -> String {
    let mut word = String::with_capacity(len);
    for _ in 0..len {
        let index = (chars.len() as f64 * rng.random::<f64>()) as usize;
        word.push(char::from(chars[index.min(chars.len() - 1)]));
    }
    word
}
