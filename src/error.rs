//! Error types for the narrowing engine.

use thiserror::Error;

use crate::predicate::Predicate;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Why a word does not fit the configured word shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordDefect {
    /// Wrong number of characters.
    #[error("expected {expected} letters, got {actual}")]
    Length {
        /// Configured word length
        expected: usize,
        /// Characters in the offending word
        actual: usize,
    },

    /// A character that is not part of the configured alphabet.
    #[error("character '{0}' is outside the alphabet")]
    OutOfAlphabet(char),
}

/// Errors surfaced by the engine. None of them are retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A probability was requested over a pool with no candidates.
    #[error("candidate pool is empty")]
    EmptyPool,

    /// The probe word does not fit the engine's word length or alphabet.
    #[error("malformed probe '{probe}': {defect}")]
    MalformedProbe {
        /// The probe as supplied
        probe: String,
        /// First defect found
        defect: WordDefect,
    },

    /// A seed or secret word does not fit the engine's word length or alphabet.
    #[error("malformed word '{word}': {defect}")]
    MalformedWord {
        /// The word as supplied
        word: String,
        /// First defect found
        defect: WordDefect,
    },

    /// An observed combination with the wrong number of predicates.
    #[error("combination has {actual} predicates, expected {expected}")]
    CombinationLength {
        /// Configured word length
        expected: usize,
        /// Predicates supplied
        actual: usize,
    },

    /// A position predicate pointing past the end of the word.
    #[error("predicate {predicate} is outside a {word_length}-letter word")]
    PositionOutOfRange {
        /// The offending predicate
        predicate: Predicate,
        /// Configured word length
        word_length: usize,
    },

    /// The engine configuration cannot describe any word.
    #[error("invalid engine config: {0}")]
    InvalidConfig(String),
}

impl EngineError {
    /// Create a MalformedProbe error.
    pub fn malformed_probe(probe: &str, defect: WordDefect) -> Self {
        Self::MalformedProbe {
            probe: probe.to_string(),
            defect,
        }
    }

    /// Create a MalformedWord error.
    pub fn malformed_word(word: &str, defect: WordDefect) -> Self {
        Self::MalformedWord {
            word: word.to_string(),
            defect,
        }
    }
}
