use std::fmt;

/// One of the two copy strategies under measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Bulk copy through a single `collect`.
    Collector,
    /// Pre-sized vector filled one element at a time.
    ForEach,
}

impl Phase {
    /// Label used at the start of a report line.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Collector => "asCollector",
            Phase::ForEach => "asForEach",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which phases a trial times, and in what order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TestKind {
    #[default]
    AB,
    BA,
    A,
    B,
}

impl TestKind {
    pub const ALL: [TestKind; 4] = [TestKind::AB, TestKind::BA, TestKind::A, TestKind::B];

    /// Look up a kind by its command line key. Unknown keys run `testAB`.
    pub fn from_key(key: &str) -> Self {
        Self::lookup(key).unwrap_or_default()
    }

    /// Strict lookup: `None` for keys other than the four known ones.
    pub fn lookup(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            TestKind::AB => "testAB",
            TestKind::BA => "testBA",
            TestKind::A => "testA",
            TestKind::B => "testB",
        }
    }

    /// Phases timed in a trial. Reports follow the same order.
    pub fn phases(self) -> &'static [Phase] {
        match self {
            TestKind::AB => &[Phase::Collector, Phase::ForEach],
            TestKind::BA => &[Phase::ForEach, Phase::Collector],
            TestKind::A => &[Phase::Collector],
            TestKind::B => &[Phase::ForEach],
        }
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
