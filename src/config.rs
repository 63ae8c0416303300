//! Run configuration for the benchmark.
//!
//! [`BenchConfig`] is built once at startup (normally by
//! [`parse_args`](crate::parse_args)) and never changes afterwards. Fields the
//! command line cannot reach (`format`, `alphabet`, `log_level`) keep their
//! defaults unless set through the library API.
//!
//! ```rust
//! use streamdemo::{BenchConfig, ReportFormat};
//!
//! let cfg = BenchConfig {
//!     kind: "testBA".to_string(),
//!     reps: 10,
//!     format: ReportFormat::Stats,
//!     ..Default::default()
//! };
//! assert_eq!(cfg.trials, 10);
//! ```

use serde::{Deserialize, Serialize};
use wordgen::{Alphabet, SourceConfig};

use crate::error::ConfigError;
use crate::report::ReportFormat;
use crate::variant::TestKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Test kind key as given, echoed in the description line.
    #[serde(default = "default_kind")]
    pub kind: String,

    /// Repetitions of each phase inside one timed block.
    #[serde(default = "default_reps")]
    pub reps: i32,

    /// Number of words in the source list.
    #[serde(default = "default_source_size")]
    pub source_size: i32,

    /// Number of times the selected test runs.
    #[serde(default = "default_trials")]
    pub trials: i32,

    #[serde(default = "default_word_min")]
    pub word_min: i32,

    /// Exclusive upper bound on word length.
    #[serde(default = "default_word_max")]
    pub word_max: i32,

    #[serde(default)]
    pub format: ReportFormat,

    #[serde(default)]
    pub alphabet: Alphabet,

    /// Fallback tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl BenchConfig {
    pub fn test_kind(&self) -> TestKind {
        TestKind::from_key(&self.kind)
    }

    pub fn source_config(&self) -> SourceConfig {
        SourceConfig::new(self.word_min, self.word_max).with_alphabet(self.alphabet)
    }

    /// The line printed before any trial runs.
    pub fn description(&self) -> String {
        format!(
            "Running test {} on {} trials each with {} reps using a source array of {} elements.",
            self.kind, self.trials, self.reps, self.source_size
        )
    }

    /// Optional sanity check. The binary does not call this: out-of-range
    /// values are accepted and simply produce degenerate runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("reps", self.reps),
            ("source_size", self.source_size),
            ("trials", self.trials),
            ("word_min", self.word_min),
        ] {
            if value < 0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.word_min > self.word_max {
            return Err(ConfigError::InvertedWordRange {
                word_min: self.word_min,
                word_max: self.word_max,
            });
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            reps: default_reps(),
            source_size: default_source_size(),
            trials: default_trials(),
            word_min: default_word_min(),
            word_max: default_word_max(),
            format: ReportFormat::default(),
            alphabet: Alphabet::default(),
            log_level: default_log_level(),
        }
    }
}

pub(crate) fn default_kind() -> String {
    "testAB".to_string()
}

pub(crate) fn default_reps() -> i32 {
    1000
}

pub(crate) fn default_source_size() -> i32 {
    100
}

pub(crate) fn default_trials() -> i32 {
    10
}

pub(crate) fn default_word_min() -> i32 {
    SourceConfig::default().word_min
}

pub(crate) fn default_word_max() -> i32 {
    SourceConfig::default().word_max
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = BenchConfig::default();
        assert_eq!(cfg.kind, "testAB");
        assert_eq!(cfg.reps, 1000);
        assert_eq!(cfg.source_size, 100);
        assert_eq!(cfg.trials, 10);
        assert_eq!(cfg.word_min, 8);
        assert_eq!(cfg.word_max, 15);
        assert_eq!(cfg.format, ReportFormat::Csv);
        assert_eq!(cfg.alphabet, Alphabet::Legacy);
        assert_eq!(cfg.log_level, "warn");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_description_line() {
        let cfg = BenchConfig {
            kind: "testA".into(),
            reps: 5,
            source_size: 3,
            trials: 2,
            ..Default::default()
        };
        assert_eq!(
            cfg.description(),
            "Running test testA on 2 trials each with 5 reps using a source array of 3 elements."
        );
    }

    #[test]
    fn test_description_echoes_unknown_kind_verbatim() {
        let cfg = BenchConfig {
            kind: "bogus".into(),
            ..Default::default()
        };
        assert!(cfg.description().starts_with("Running test bogus on"));
        assert_eq!(cfg.test_kind(), TestKind::AB);
    }

    #[test]
    fn test_validation_rejects_negative_values() {
        let cfg = BenchConfig {
            trials: -1,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::Negative {
                field: "trials",
                value: -1
            })
        );
    }

    #[test]
    fn test_validation_rejects_inverted_range() {
        let cfg = BenchConfig {
            word_min: 9,
            word_max: 3,
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("must not exceed"));
    }

    #[test]
    fn test_source_config_carries_alphabet() {
        let cfg = BenchConfig {
            word_min: 2,
            word_max: 4,
            alphabet: Alphabet::Full,
            ..Default::default()
        };
        let source = cfg.source_config();
        assert_eq!(source.word_min, 2);
        assert_eq!(source.word_max, 4);
        assert_eq!(source.alphabet, Alphabet::Full);
    }

    #[test]
    fn test_default_source_config_matches_wordgen() {
        assert_eq!(BenchConfig::default().source_config(), SourceConfig::default());
    }

    #[test]
    fn test_empty_json_is_default_config() {
        let cfg: BenchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, BenchConfig::default());
    }

    #[test]
    fn test_partial_json_overrides_given_fields() {
        let cfg: BenchConfig =
            serde_json::from_str(r#"{"kind":"testB","trials":3,"format":"stats","alphabet":"full"}"#)
                .unwrap();
        assert_eq!(
            cfg,
            BenchConfig {
                kind: "testB".into(),
                trials: 3,
                format: ReportFormat::Stats,
                alphabet: Alphabet::Full,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_config_json_round_trip() {
        let cfg = BenchConfig {
            kind: "testBA".into(),
            reps: 7,
            word_min: 1,
            word_max: 2,
            log_level: "debug".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains(r#""format":"csv""#), "{json}");
        assert!(json.contains(r#""alphabet":"legacy""#), "{json}");
        let back: BenchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
