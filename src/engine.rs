//! Narrowing engine: entropy of probes and pool updates from observed feedback.
//!
//! The engine owns one [`Snapshot`] (pool plus the index built from it). A round of
//! play computes everything against the current snapshot, then builds a new one for
//! the narrowed pool and swaps it in whole. Readers that took a snapshot earlier keep
//! seeing a consistent pool/index pair for as long as they hold it.

use rayon::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::combination::FilterCombination;
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::index::CandidateIndex;
use crate::metrics::{expected_information, expected_remaining, information};
use crate::predicate::Predicate;
use crate::Word;

/// Outcome of one round of play.
#[derive(Debug, Clone)]
pub struct StepResult {
    /// Pool after narrowing to the observed bucket
    pub new_pool: HashSet<Word>,
    /// Entropy of the probe against the pool before narrowing
    pub expected_information: f64,
    /// Bits actually gained from the observed combination
    pub actual_information: f64,
}

/// Result of scoring a potential probe
#[derive(Debug, Clone)]
pub struct ProbeScore {
    pub word: String,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub is_candidate: bool,
}

/// An immutable pool together with the index that reflects it.
#[derive(Debug, Clone)]
pub struct Snapshot {
    config: Arc<EngineConfig>,
    pool: HashSet<Word>,
    index: CandidateIndex,
}

impl Snapshot {
    fn build(config: Arc<EngineConfig>, pool: HashSet<Word>) -> Self {
        let index = CandidateIndex::build(&pool, &config);
        Self {
            config,
            pool,
            index,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn pool(&self) -> &HashSet<Word> {
        &self.pool
    }

    pub fn index(&self) -> &CandidateIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.pool.contains(word)
    }

    pub fn check_probe(&self, probe: &str) -> Result<()> {
        self.config
            .check_word(probe)
            .map_err(|defect| EngineError::malformed_probe(probe, defect))
    }

    /// Reject combinations that do not describe a word of the configured length.
    pub fn check_combination(&self, combination: &FilterCombination) -> Result<()> {
        let word_length = self.config.word_length;
        if combination.len() != word_length {
            return Err(EngineError::CombinationLength {
                expected: word_length,
                actual: combination.len(),
            });
        }
        for predicate in combination {
            if let Predicate::PositionMatch(_, pos) = *predicate {
                if pos >= word_length {
                    return Err(EngineError::PositionOutOfRange {
                        predicate: *predicate,
                        word_length,
                    });
                }
            }
        }
        Ok(())
    }

    fn require_candidates(&self) -> Result<usize> {
        match self.pool.len() {
            0 => Err(EngineError::EmptyPool),
            n => Ok(n),
        }
    }

    /// Pool words matching every predicate of `combination`.
    ///
    /// Predicates no pool word satisfies simply yield an empty bucket.
    pub fn bucket(&self, combination: &FilterCombination) -> HashSet<Word> {
        if combination.is_empty() {
            return self.pool.clone();
        }
        self.index.intersect(combination)
    }

    pub fn bucket_len(&self, combination: &FilterCombination) -> usize {
        if combination.is_empty() {
            return self.pool.len();
        }
        self.index.count(combination)
    }

    /// `|bucket| / |pool|` for each combination of `probe`, in generation order.
    pub fn outcome_probabilities(&self, probe: &str) -> Result<Vec<f64>> {
        self.check_probe(probe)?;
        let n = self.require_candidates()? as f64;
        Ok(FilterCombination::all_for(probe)
            .map(|combination| self.bucket_len(&combination) as f64 / n)
            .collect())
    }

    /// Expected information in bits of playing `probe` against this pool.
    pub fn entropy(&self, probe: &str) -> Result<f64> {
        Ok(self
            .outcome_probabilities(probe)?
            .into_iter()
            .map(expected_information)
            .sum())
    }

    /// Sum of [`Snapshot::outcome_probabilities`].
    ///
    /// Buckets overlap: a word holding `c` at position `i` satisfies both
    /// `PositionMatch(c, i)` and `Include(c)`, so the sum exceeds 1.0 whenever a
    /// probe letter sits where some pool word has it. It is exactly 1.0 when each
    /// word matches a single combination, e.g. a probe sharing no letter with the
    /// pool. Repeated probe letters only get `Exclude`/`PositionMatch` at their later
    /// positions, so words holding them elsewhere match nothing there.
    pub fn total_probability(&self, probe: &str) -> Result<f64> {
        Ok(self.outcome_probabilities(probe)?.into_iter().sum())
    }

    pub fn score(&self, probe: &str) -> Result<ProbeScore> {
        let entropy = self.entropy(probe)?;
        Ok(ProbeScore {
            word: probe.to_string(),
            entropy,
            expected_remaining: expected_remaining(self.pool.len(), entropy),
            is_candidate: self.contains(probe),
        })
    }
}

/// Owner of the candidate pool across rounds of play.
#[derive(Debug, Clone)]
pub struct NarrowingEngine {
    snapshot: Arc<Snapshot>,
    applied: Vec<FilterCombination>,
}

impl NarrowingEngine {
    /// Seed an engine from a word list. Repeated words collapse into one candidate.
    pub fn new<I, S>(config: EngineConfig, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;
        let pool = words
            .into_iter()
            .map(|word| {
                let word = word.as_ref();
                config
                    .check_word(word)
                    .map(|()| Word::from(word))
                    .map_err(|defect| EngineError::malformed_word(word, defect))
            })
            .collect::<Result<HashSet<Word>>>()?;
        debug!(
            words = pool.len(),
            word_length = config.word_length,
            "seeded candidate pool"
        );
        Ok(Self {
            snapshot: Arc::new(Snapshot::build(Arc::new(config), pool)),
            applied: Vec::new(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        self.snapshot.config()
    }

    /// Shared handle on the current pool and index.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn pool(&self) -> &HashSet<Word> {
        self.snapshot.pool()
    }

    pub fn remaining_count(&self) -> usize {
        self.snapshot.len()
    }

    /// Pool words in lexical order
    pub fn sorted_pool(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.snapshot.pool().iter().map(|w| &**w).collect();
        words.sort_unstable();
        words
    }

    /// Every combination applied by [`NarrowingEngine::step`], oldest first.
    pub fn applied_filters(&self) -> &[FilterCombination] {
        &self.applied
    }

    pub fn entropy(&self, probe: &str) -> Result<f64> {
        self.snapshot.entropy(probe)
    }

    pub fn total_probability(&self, probe: &str) -> Result<f64> {
        self.snapshot.total_probability(probe)
    }

    pub fn bucket(&self, combination: &FilterCombination) -> HashSet<Word> {
        self.snapshot.bucket(combination)
    }

    /// The pool `combination` would narrow to. Does not change the engine.
    pub fn narrow(&self, combination: &FilterCombination) -> HashSet<Word> {
        self.bucket(combination)
    }

    pub fn score(&self, probe: &str) -> Result<ProbeScore> {
        self.snapshot.score(probe)
    }

    /// Score many probes in parallel against the current snapshot.
    ///
    /// Results come back in the order of `probes`; picking one is up to the caller.
    #[instrument(skip_all, fields(probes = probes.len(), pool = self.remaining_count()))]
    pub fn score_all<S>(&self, probes: &[S]) -> Result<Vec<ProbeScore>>
    where
        S: AsRef<str> + Sync,
    {
        let snapshot = self.snapshot();
        probes
            .par_iter()
            .map(|probe| snapshot.score(probe.as_ref()))
            .collect()
    }

    /// Play one round: narrow the pool to the bucket of `observed`.
    ///
    /// Both information values are measured against the pool before narrowing. On
    /// error the engine is left exactly as it was.
    #[instrument(skip(self, observed), fields(observed = %observed))]
    pub fn step(&mut self, probe: &str, observed: &FilterCombination) -> Result<StepResult> {
        let current = self.snapshot();
        current.check_probe(probe)?;
        current.check_combination(observed)?;
        let before = current.require_candidates()?;

        let matched = current.bucket(observed);
        let actual_information = information(matched.len() as f64 / before as f64);
        let expected_information = current.entropy(probe)?;

        if matched.is_empty() {
            warn!(
                probe,
                combination = %observed.to_marks(),
                "observed combination matches no candidates"
            );
        }
        debug!(
            before,
            after = matched.len(),
            expected_information,
            actual_information,
            "narrowed candidate pool"
        );

        self.snapshot = Arc::new(Snapshot::build(
            Arc::clone(&current.config),
            matched.clone(),
        ));
        self.applied.push(observed.clone());

        Ok(StepResult {
            new_pool: matched,
            expected_information,
            actual_information,
        })
    }

    /// Play one round against a known secret instead of a reported combination.
    pub fn step_against(&mut self, probe: &str, secret: &str) -> Result<StepResult> {
        self.snapshot.check_probe(probe)?;
        self.config()
            .check_word(secret)
            .map_err(|defect| EngineError::malformed_word(secret, defect))?;
        let observed = FilterCombination::observe(probe, secret);
        self.step(probe, &observed)
    }
}
