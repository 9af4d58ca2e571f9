//! Filter combinations: one predicate per position of a probe.
//!
//! A combination stands for one feedback row the probe could receive. For
//! position `i` holding character `c` the candidates are `Exclude(c)` and
//! `PositionMatch(c, i)`, plus `Include(c)` when `i` is the first place `c`
//! appears in the probe. Repeated letters in a probe therefore get a single
//! "present somewhere" option, not one per occurrence.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::predicate::{Mark, Predicate};

/// An ordered sequence of predicates, one per word position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterCombination(Vec<Predicate>);

impl FilterCombination {
    /// Wrap predicates given in position order.
    pub fn new(predicates: Vec<Predicate>) -> Self {
        Self(predicates)
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Predicate> {
        self.0.iter()
    }

    /// Check `word` against every predicate by direct evaluation.
    pub fn matches(&self, word: &str) -> bool {
        self.0.iter().all(|p| p.evaluate(word))
    }

    /// Parse a mark row like "gybbb" or "@+!!!" for the given probe.
    ///
    /// Returns `None` when the row and probe differ in length or a mark is unknown.
    pub fn from_marks(probe: &str, marks: &str) -> Option<Self> {
        if probe.chars().count() != marks.chars().count() {
            return None;
        }
        probe
            .chars()
            .zip(marks.chars())
            .enumerate()
            .map(|(pos, (c, mark))| {
                Mark::from_char(mark).map(|m| Predicate::from_mark(m, c, pos))
            })
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    /// The combination a secret word answers to `probe` with.
    ///
    /// A position becomes `PositionMatch` when the secret holds the same letter there,
    /// `Include` when the letter appears elsewhere in the secret, and `Exclude` otherwise.
    /// The secret always satisfies the result.
    pub fn observe(probe: &str, secret: &str) -> Self {
        let secret_chars: Vec<char> = secret.chars().collect();
        probe
            .chars()
            .enumerate()
            .map(|(pos, c)| {
                if secret_chars.get(pos) == Some(&c) {
                    Predicate::PositionMatch(c, pos)
                } else if secret_chars.contains(&c) {
                    Predicate::Include(c)
                } else {
                    Predicate::Exclude(c)
                }
            })
            .collect()
    }

    /// Row of g/y/b marks, the inverse of [`FilterCombination::from_marks`].
    pub fn to_marks(&self) -> String {
        self.0.iter().map(|p| p.mark().to_char()).collect()
    }

    /// Row of tile glyphs, one per position.
    pub fn to_emoji_string(&self) -> String {
        self.0.iter().map(|p| p.mark().to_glyph()).collect()
    }

    /// Every combination the probe can theoretically be answered with.
    pub fn all_for(probe: &str) -> Combinations {
        Combinations::new(option_sets(probe))
    }
}

impl From<Vec<Predicate>> for FilterCombination {
    fn from(predicates: Vec<Predicate>) -> Self {
        Self(predicates)
    }
}

impl FromIterator<Predicate> for FilterCombination {
    fn from_iter<T: IntoIterator<Item = Predicate>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FilterCombination {
    type Item = &'a Predicate;
    type IntoIter = std::slice::Iter<'a, Predicate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for FilterCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}

/// Per-position predicate options for a probe.
pub fn option_sets(probe: &str) -> Vec<Vec<Predicate>> {
    let mut seen: Vec<char> = Vec::new();
    probe
        .chars()
        .enumerate()
        .map(|(pos, c)| {
            let mut options = vec![Predicate::Exclude(c), Predicate::PositionMatch(c, pos)];
            if !seen.contains(&c) {
                options.push(Predicate::Include(c));
                seen.push(c);
            }
            options
        })
        .collect()
}

/// Number of combinations [`FilterCombination::all_for`] yields, without enumerating them.
pub fn combination_count(probe: &str) -> usize {
    option_sets(probe).iter().map(Vec::len).product()
}

/// Lazy Cartesian product over per-position option sets.
///
/// Yields combinations in odometer order, the last position varying fastest.
#[derive(Debug, Clone)]
pub struct Combinations {
    options: Vec<Vec<Predicate>>,
    cursor: Vec<usize>,
    done: bool,
}

impl Combinations {
    fn new(options: Vec<Vec<Predicate>>) -> Self {
        let done = options.iter().any(Vec::is_empty);
        let cursor = vec![0; options.len()];
        Self {
            options,
            cursor,
            done,
        }
    }
}

impl Iterator for Combinations {
    type Item = FilterCombination;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current = self
            .cursor
            .iter()
            .zip(&self.options)
            .map(|(&i, options)| options[i])
            .collect();

        // Advance the odometer; finishing means every digit wrapped.
        self.done = true;
        for pos in (0..self.cursor.len()).rev() {
            self.cursor[pos] += 1;
            if self.cursor[pos] < self.options[pos].len() {
                self.done = false;
                break;
            }
            self.cursor[pos] = 0;
        }

        Some(current)
    }
}
