use serde::{Deserialize, Serialize};

/// The historical word alphabet: 61 characters.
///
/// The lowercase run skips `w` (`...uvxyz`). That is almost certainly a typo
/// in the alphabet this tool has always used, but existing output depends on
/// it, so it stays the default. Use [`FULL_WORD_CHARS`] for the corrected set.
pub const LEGACY_WORD_CHARS: &str = concat!(
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789",
    "abcdefghijklmnopqrstuvxyz"
);

/// All 62 ASCII letters and digits.
pub const FULL_WORD_CHARS: &str = concat!(
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789",
    "abcdefghijklmnopqrstuvwxyz"
);

/// Which character set words are drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    #[default]
    Legacy,
    Full,
}

impl Alphabet {
    pub fn chars(self) -> &'static [u8] {
        match self {
            Alphabet::Legacy => LEGACY_WORD_CHARS.as_bytes(),
            Alphabet::Full => FULL_WORD_CHARS.as_bytes(),
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.chars().contains(&(c as u8))
    }
}
