//! Feedback predicates.
//!
//! A predicate is one atomic feedback constraint on a word. Each kind has a one-character
//! [`Mark`] so combinations can be written and read as short rows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which predicate kind a position of a combination carries, as written in a mark row.
///
/// A row such as `"gbyyg"` (or `"@!++@"`) reads position by position against a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// `PositionMatch` on the probe letter at this position
    Placed,
    /// `Include` of the probe letter
    Present,
    /// `Exclude` of the probe letter
    Absent,
}

impl Mark {
    /// Tile glyph used when rendering a combination
    pub fn to_glyph(self) -> char {
        match self {
            Mark::Placed => '🟩',
            Mark::Present => '🟨',
            Mark::Absent => '⬛',
        }
    }

    /// Canonical letter form, accepted back by [`Mark::from_char`]
    pub fn to_char(self) -> char {
        match self {
            Mark::Placed => 'g',
            Mark::Present => 'y',
            Mark::Absent => 'b',
        }
    }

    /// Parse a mark: `g`/`@` placed, `y`/`+` present, `b`/`!` absent.
    ///
    /// The symbols mirror how [`Predicate`] displays itself. Letters are case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '@' => Some(Mark::Placed),
            'y' | '+' => Some(Mark::Present),
            'b' | '!' => Some(Mark::Absent),
            _ => None,
        }
    }
}

/// One atomic feedback constraint.
///
/// Equality and hashing are structural over tag and fields, so predicates can
/// key the candidate index directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Predicate {
    /// The character occurs nowhere in the word.
    Exclude(char),
    /// The character sits at the given zero-based position.
    PositionMatch(char, usize),
    /// The character occurs somewhere in the word.
    Include(char),
}

impl Predicate {
    /// Whether `word` satisfies this predicate.
    pub fn evaluate(&self, word: &str) -> bool {
        match *self {
            Predicate::Exclude(c) => !word.contains(c),
            Predicate::PositionMatch(c, pos) => word.chars().nth(pos) == Some(c),
            Predicate::Include(c) => word.contains(c),
        }
    }

    /// The mark this predicate is written as in a row.
    pub fn mark(&self) -> Mark {
        match self {
            Predicate::Exclude(_) => Mark::Absent,
            Predicate::PositionMatch(..) => Mark::Placed,
            Predicate::Include(_) => Mark::Present,
        }
    }

    /// Build the predicate a mark stands for at `pos` of a probe whose letter there is `c`.
    pub fn from_mark(mark: Mark, c: char, pos: usize) -> Self {
        match mark {
            Mark::Placed => Predicate::PositionMatch(c, pos),
            Mark::Present => Predicate::Include(c),
            Mark::Absent => Predicate::Exclude(c),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Exclude(c) => write!(f, "!{}", c),
            Predicate::PositionMatch(c, pos) => write!(f, "{}@{}", c, pos),
            Predicate::Include(c) => write!(f, "+{}", c),
        }
    }
}
