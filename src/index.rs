//! Candidate index: predicate → pool words satisfying it.
//!
//! Built once per pool and never patched. Looking up which pool words satisfy a
//! predicate is a single map access, which is what makes sweeping every
//! combination of a probe affordable.

use std::collections::{HashMap, HashSet};
use tracing::trace;

use crate::combination::FilterCombination;
use crate::config::EngineConfig;
use crate::predicate::Predicate;
use crate::Word;

#[derive(Debug, Clone, Default)]
pub struct CandidateIndex {
    entries: HashMap<Predicate, HashSet<Word>>,
}

impl CandidateIndex {
    /// Index every word of `pool`. Cost is O(pool size × alphabet size).
    pub fn build<'a, I>(pool: I, config: &EngineConfig) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut entries: HashMap<Predicate, HashSet<Word>> = HashMap::new();
        let mut words = 0usize;
        for word in pool {
            for predicate in Self::predicates_for(word, config) {
                entries.entry(predicate).or_default().insert(word.clone());
            }
            words += 1;
        }
        trace!(words, entries = entries.len(), "built candidate index");
        Self { entries }
    }

    /// Predicates a word is filed under.
    ///
    /// One `PositionMatch` per position, one `Include` per distinct letter, and one
    /// `Exclude` for every alphabet letter the word lacks.
    pub fn predicates_for(word: &str, config: &EngineConfig) -> Vec<Predicate> {
        let mut predicates = Vec::with_capacity(word.len() * 2 + config.alphabet.len());
        let mut seen: Vec<char> = Vec::new();
        for (pos, c) in word.chars().enumerate() {
            predicates.push(Predicate::PositionMatch(c, pos));
            if !seen.contains(&c) {
                predicates.push(Predicate::Include(c));
                seen.push(c);
            }
        }
        predicates.extend(
            config
                .alphabet_chars()
                .filter(|c| !seen.contains(c))
                .map(Predicate::Exclude),
        );
        predicates
    }

    /// Words filed under `predicate`. `None` means no pool word satisfies it.
    pub fn get(&self, predicate: &Predicate) -> Option<&HashSet<Word>> {
        self.entries.get(predicate)
    }

    /// Number of distinct predicates with at least one word.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pool words satisfying every predicate of `combination`.
    ///
    /// An empty combination constrains nothing; callers resolve it against the pool.
    pub fn intersect(&self, combination: &FilterCombination) -> HashSet<Word> {
        match self.entries_smallest_first(combination) {
            Some((smallest, rest)) => smallest
                .iter()
                .filter(|word| rest.iter().all(|set| set.contains(*word)))
                .cloned()
                .collect(),
            None => HashSet::new(),
        }
    }

    /// Size of [`CandidateIndex::intersect`] without building the set.
    pub fn count(&self, combination: &FilterCombination) -> usize {
        match self.entries_smallest_first(combination) {
            Some((smallest, rest)) => smallest
                .iter()
                .filter(|word| rest.iter().all(|set| set.contains(*word)))
                .count(),
            None => 0,
        }
    }

    /// Index entries for a combination, smallest split off first.
    ///
    /// `None` if the combination is empty or any predicate has no entry.
    fn entries_smallest_first(
        &self,
        combination: &FilterCombination,
    ) -> Option<(&HashSet<Word>, Vec<&HashSet<Word>>)> {
        let mut sets = combination
            .iter()
            .map(|p| self.entries.get(p))
            .collect::<Option<Vec<_>>>()?;
        sets.sort_by_key(|set| set.len());
        if sets.is_empty() {
            return None;
        }
        let smallest = sets.remove(0);
        Some((smallest, sets))
    }
}
