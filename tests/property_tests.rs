use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::HashSet;
use wordle_entropy::metrics::expected_information;
use wordle_entropy::{EngineConfig, FilterCombination, NarrowingEngine};

const EPSILON: f64 = 1e-9;

fn config() -> EngineConfig {
    EngineConfig::new(3, "abcd")
}

fn pool_strategy() -> impl Strategy<Value = HashSet<String>> {
    prop::collection::hash_set("[a-d]{3}", 1..24)
}

fn probe_strategy() -> impl Strategy<Value = String> {
    "[a-d]{3}"
}

fn distinct_letter_probe() -> impl Strategy<Value = String> {
    "[a-d]{3}".prop_filter("letters must differ", |probe| {
        let letters: HashSet<char> = probe.chars().collect();
        letters.len() == 3
    })
}

fn sorted(pool: &HashSet<String>) -> Vec<String> {
    let mut words: Vec<String> = pool.iter().cloned().collect();
    words.sort();
    words
}

proptest! {
    #[test]
    fn every_word_lands_in_some_bucket_for_distinct_letters(
        pool in pool_strategy(),
        probe in distinct_letter_probe(),
    ) {
        let engine = NarrowingEngine::new(config(), &pool).unwrap();
        for word in &pool {
            prop_assert!(
                FilterCombination::all_for(&probe).any(|c| c.matches(word)),
                "word {}",
                word
            );
        }
        let total = engine.total_probability(&probe).unwrap();
        prop_assert!(total >= 1.0 - EPSILON, "total {}", total);
    }

    #[test]
    fn total_probability_counts_every_match(pool in pool_strategy(), probe in probe_strategy()) {
        let engine = NarrowingEngine::new(config(), &pool).unwrap();
        let n = pool.len() as f64;
        let scanned: f64 = FilterCombination::all_for(&probe)
            .map(|c| pool.iter().filter(|w| c.matches(w)).count() as f64 / n)
            .sum();
        let total = engine.total_probability(&probe).unwrap();
        prop_assert!((total - scanned).abs() < EPSILON, "total {} scanned {}", total, scanned);
    }

    #[test]
    fn entropy_matches_scan_and_is_repeatable(
        pool in pool_strategy(),
        probe in probe_strategy(),
    ) {
        let engine = NarrowingEngine::new(config(), &pool).unwrap();
        let first = engine.entropy(&probe).unwrap();
        let second = engine.entropy(&probe).unwrap();

        let n = pool.len() as f64;
        let scanned: f64 = FilterCombination::all_for(&probe)
            .map(|c| pool.iter().filter(|w| c.matches(w)).count() as f64 / n)
            .map(expected_information)
            .sum();

        prop_assert_eq!(first, second);
        prop_assert!(first >= 0.0);
        prop_assert!((first - scanned).abs() < EPSILON, "entropy {} scanned {}", first, scanned);
        prop_assert_eq!(engine.remaining_count(), pool.len());
        if pool.len() == 1 {
            prop_assert_eq!(first, 0.0);
        }
    }

    #[test]
    fn index_agrees_with_direct_scan(pool in pool_strategy(), probe in probe_strategy()) {
        let engine = NarrowingEngine::new(config(), &pool).unwrap();
        for combination in FilterCombination::all_for(&probe) {
            let indexed: HashSet<String> =
                engine.bucket(&combination).iter().map(|w| w.to_string()).collect();
            let scanned: HashSet<String> =
                pool.iter().filter(|w| combination.matches(w)).cloned().collect();
            prop_assert_eq!(indexed, scanned, "combination {:?}", combination);
        }
    }

    #[test]
    fn step_splits_pool_by_combination(
        pool in pool_strategy(),
        probe in probe_strategy(),
        pick in any::<Index>(),
    ) {
        let mut engine = NarrowingEngine::new(config(), &pool).unwrap();
        let combinations: Vec<FilterCombination> = FilterCombination::all_for(&probe).collect();
        let observed = combinations[pick.index(combinations.len())].clone();
        let expected = engine.entropy(&probe).unwrap();

        let result = engine.step(&probe, &observed).unwrap();
        let survivors: HashSet<String> = result.new_pool.iter().map(|w| w.to_string()).collect();

        prop_assert!(survivors.len() <= pool.len());
        for word in &pool {
            prop_assert_eq!(survivors.contains(word), observed.matches(word), "word {}", word);
        }
        if survivors.is_empty() {
            prop_assert_eq!(result.actual_information, 0.0);
        } else {
            let ratio = survivors.len() as f64 / pool.len() as f64;
            prop_assert!((result.actual_information - -ratio.log2()).abs() < EPSILON);
        }
        prop_assert_eq!(result.expected_information, expected);
        prop_assert_eq!(engine.remaining_count(), survivors.len());
        prop_assert_eq!(engine.applied_filters().last(), Some(&observed));
    }

    #[test]
    fn stepping_against_a_secret_keeps_it(
        pool in pool_strategy(),
        probe in probe_strategy(),
        pick in any::<Index>(),
    ) {
        let words = sorted(&pool);
        let secret = &words[pick.index(words.len())];
        let mut engine = NarrowingEngine::new(config(), &pool).unwrap();

        let result = engine.step_against(&probe, secret).unwrap();

        prop_assert!(result.new_pool.contains(secret.as_str()));
        prop_assert!(result.actual_information >= 0.0);
    }
}
