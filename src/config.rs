//! Engine configuration: word length and alphabet.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{EngineError, Result, WordDefect};
use crate::{DEFAULT_ALPHABET, DEFAULT_WORD_LENGTH};

/// Shape of the words an engine instance works with.
///
/// Missing fields fall back to the defaults when deserializing, so `{}` is a
/// valid document describing five-letter lowercase words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of characters in every word
    pub word_length: usize,
    /// Characters a word may contain, each listed once
    pub alphabet: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            alphabet: DEFAULT_ALPHABET.to_string(),
        }
    }
}

impl EngineConfig {
    /// Config for words of `word_length` letters drawn from `alphabet`.
    pub fn new(word_length: usize, alphabet: impl Into<String>) -> Self {
        Self {
            word_length,
            alphabet: alphabet.into(),
        }
    }

    /// Reject configurations that cannot describe any word.
    pub fn validate(&self) -> Result<()> {
        if self.word_length == 0 {
            return Err(EngineError::InvalidConfig(
                "word_length must be at least 1".to_string(),
            ));
        }
        if self.alphabet.is_empty() {
            return Err(EngineError::InvalidConfig(
                "alphabet must not be empty".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        match self.alphabet.chars().find(|&c| !seen.insert(c)) {
            Some(c) => Err(EngineError::InvalidConfig(format!(
                "alphabet lists '{}' more than once",
                c
            ))),
            None => Ok(()),
        }
    }

    /// Whether `c` belongs to the alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.alphabet.contains(c)
    }

    pub fn alphabet_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.alphabet.chars()
    }

    /// First reason `word` does not fit this configuration, if any.
    pub fn check_word(&self, word: &str) -> std::result::Result<(), WordDefect> {
        let actual = word.chars().count();
        if actual != self.word_length {
            return Err(WordDefect::Length {
                expected: self.word_length,
                actual,
            });
        }
        match word.chars().find(|&c| !self.contains(c)) {
            Some(c) => Err(WordDefect::OutOfAlphabet(c)),
            None => Ok(()),
        }
    }
}
