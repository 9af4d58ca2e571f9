//! # Wordle Entropy
//!
//! Candidate narrowing and information scoring for fixed-length word-guessing games.
//!
//! The engine keeps a pool of words that are still consistent with the feedback seen so
//! far, together with an index from feedback predicates to the pool words satisfying them.
//! For any probe word it reports the expected information (entropy, in bits) of playing
//! that probe, and after a real round it narrows the pool to the observed bucket.
//!
//! ```rust
//! use wordle_entropy::{EngineConfig, FilterCombination, NarrowingEngine};
//!
//! let words = ["snake", "stake", "shake", "slate"];
//! let mut engine = NarrowingEngine::new(EngineConfig::default(), words).unwrap();
//!
//! let observed = FilterCombination::from_marks("snake", "gbggg").unwrap();
//! let result = engine.step("snake", &observed).unwrap();
//!
//! assert_eq!(result.new_pool.len(), 2);
//! assert!((result.actual_information - 1.0).abs() < 1e-12);
//! ```

pub mod combination;
pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod metrics;
pub mod predicate;

pub use combination::{Combinations, FilterCombination};
pub use config::EngineConfig;
pub use engine::{NarrowingEngine, ProbeScore, Snapshot, StepResult};
pub use error::{EngineError, Result, WordDefect};
pub use index::CandidateIndex;
pub use predicate::{Mark, Predicate};

/// Word length used by [`EngineConfig::default`]
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Alphabet used by [`EngineConfig::default`]
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// A pool word. Shared between the pool and every index entry that holds it.
pub type Word = std::sync::Arc<str>;
