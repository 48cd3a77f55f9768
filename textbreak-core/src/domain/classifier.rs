//! Character classification for line-budget counting
//!
//! Every character carries a weight of 0 or 1 under a [`CountingPolicy`].
//! The reflow engine sums these weights to decide where lines break.
//!
//! - Korean-only counts precomposed Hangul syllables (U+AC00..=U+D7A3)
//! - All-characters counts everything except the ASCII space
//! - The two exclusion variants additionally skip punctuation, line feeds
//!   and invisible marks that do not occupy a visible cell

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// First precomposed Hangul syllable (가)
pub const HANGUL_SYLLABLE_FIRST: char = '\u{AC00}';

/// Last precomposed Hangul syllable (힣)
pub const HANGUL_SYLLABLE_LAST: char = '\u{D7A3}';

/// Zero-width and direction marks removed by sentence normalization
pub const ZERO_WIDTH_MARKS: [char; 7] = [
    '\u{200B}', // ZERO WIDTH SPACE
    '\u{200C}', // ZERO WIDTH NON-JOINER
    '\u{200D}', // ZERO WIDTH JOINER
    '\u{200E}', // LEFT-TO-RIGHT MARK
    '\u{200F}', // RIGHT-TO-LEFT MARK
    '\u{FEFF}', // ZERO WIDTH NO-BREAK SPACE / BOM
    '\u{2060}', // WORD JOINER
];

/// Invisible characters that never count under the exclusion policies
pub const INVISIBLE_CHARS: [char; 10] = [
    '\u{200B}', // ZERO WIDTH SPACE
    '\u{200C}', // ZERO WIDTH NON-JOINER
    '\u{200D}', // ZERO WIDTH JOINER
    '\u{200E}', // LEFT-TO-RIGHT MARK
    '\u{200F}', // RIGHT-TO-LEFT MARK
    '\u{FEFF}', // ZERO WIDTH NO-BREAK SPACE / BOM
    '\u{2060}', // WORD JOINER
    '\u{00A0}', // NO-BREAK SPACE
    '\u{180E}', // MONGOLIAN VOWEL SEPARATOR
    '\u{3164}', // HANGUL FILLER
];

/// Policy deciding which characters count toward a line budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountingPolicy {
    /// Only precomposed Hangul syllables count
    KoreanOnly,
    /// Every character except U+0020 counts
    AllCharsSimple,
    /// Every character except spaces, commas, periods, `!`, line feeds
    /// and invisible marks counts
    #[default]
    AllCharsExcludingPeriod,
    /// Like [`CountingPolicy::AllCharsExcludingPeriod`] but periods count
    AllCharsIncludingPeriod,
}

impl CountingPolicy {
    /// All policies in declaration order
    pub const ALL: [CountingPolicy; 4] = [
        CountingPolicy::KoreanOnly,
        CountingPolicy::AllCharsSimple,
        CountingPolicy::AllCharsExcludingPeriod,
        CountingPolicy::AllCharsIncludingPeriod,
    ];

    /// Weight of a single character: 1 if it counts, 0 otherwise
    #[inline]
    pub fn weight(self, ch: char) -> usize {
        usize::from(self.counts(ch))
    }

    /// Whether the character counts toward the budget
    pub fn counts(self, ch: char) -> bool {
        match self {
            CountingPolicy::KoreanOnly => is_hangul_syllable(ch),
            CountingPolicy::AllCharsSimple => ch != ' ',
            CountingPolicy::AllCharsExcludingPeriod => {
                !matches!(ch, ' ' | ',' | '.' | '!' | '\n') && !is_invisible(ch)
            }
            CountingPolicy::AllCharsIncludingPeriod => {
                !matches!(ch, ' ' | ',' | '!' | '\n') && !is_invisible(ch)
            }
        }
    }

    /// Sum of character weights over `text`
    pub fn count(self, text: &str) -> usize {
        text.chars().filter(|&ch| self.counts(ch)).count()
    }

    /// Stable identifier used in configuration files and on the command line
    pub fn code(self) -> &'static str {
        match self {
            CountingPolicy::KoreanOnly => "korean-only",
            CountingPolicy::AllCharsSimple => "all-chars-simple",
            CountingPolicy::AllCharsExcludingPeriod => "all-chars-excluding-period",
            CountingPolicy::AllCharsIncludingPeriod => "all-chars-including-period",
        }
    }

    /// Human readable name
    pub fn name(self) -> &'static str {
        match self {
            CountingPolicy::KoreanOnly => "Korean only",
            CountingPolicy::AllCharsSimple => "All characters (space excluded)",
            CountingPolicy::AllCharsExcludingPeriod => "All characters (punctuation excluded)",
            CountingPolicy::AllCharsIncludingPeriod => "All characters (periods counted)",
        }
    }
}

impl fmt::Display for CountingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CountingPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "korean-only" | "korean" | "ko" | "hangul" => Ok(CountingPolicy::KoreanOnly),
            "all-chars-simple" | "all-chars" | "all" | "simple" => {
                Ok(CountingPolicy::AllCharsSimple)
            }
            "all-chars-excluding-period" | "excluding-period" => {
                Ok(CountingPolicy::AllCharsExcludingPeriod)
            }
            "all-chars-including-period" | "including-period" => {
                Ok(CountingPolicy::AllCharsIncludingPeriod)
            }
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

/// Inclusive range check against the Hangul syllable block
#[inline]
pub fn is_hangul_syllable(ch: char) -> bool {
    (HANGUL_SYLLABLE_FIRST..=HANGUL_SYLLABLE_LAST).contains(&ch)
}

/// Whether `ch` is one of the invisible marks in [`INVISIBLE_CHARS`]
#[inline]
pub fn is_invisible(ch: char) -> bool {
    INVISIBLE_CHARS.contains(&ch)
}

/// Whether `ch` is one of the zero-width marks in [`ZERO_WIDTH_MARKS`]
#[inline]
pub fn is_zero_width_mark(ch: char) -> bool {
    ZERO_WIDTH_MARKS.contains(&ch)
}

/// Classify a symbol given as a string slice.
///
/// Anything other than exactly one character (empty input, several code
/// points) is not countable.
pub fn is_countable(symbol: &str, policy: CountingPolicy) -> bool {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => policy.counts(ch),
        _ => false,
    }
}

/// Whether a single-character symbol is visible (not whitespace).
///
/// Returns `false` for empty or multi-character input.
pub fn is_visible_char(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => !ch.is_whitespace(),
        _ => false,
    }
}

/// Number of characters that are not whitespace of any kind
pub fn count_visible(text: &str) -> usize {
    text.chars().filter(|ch| !ch.is_whitespace()).count()
}

/// Weighted character count of `text` under `policy`
pub fn count_weighted(text: &str, policy: CountingPolicy) -> usize {
    policy.count(text)
}
