//! Dictionary assembly: uniqueness, length filtering, ordering, truncation.

use std::collections::BTreeSet;

use rand::Rng;

use crate::error::LexigenError;
use crate::synth::Synthesizer;

/// Generation parameters for [`Builder`].
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Minimum accepted word length in bytes, inclusive.
    pub min_word_len: usize,
    /// Maximum accepted word length in bytes, inclusive.
    pub max_word_len: usize,
    /// Ceiling on synthesis attempts before the run fails with
    /// [`LexigenError::CatalogExhausted`].
    pub max_attempts: u64,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            min_word_len: 3,
            max_word_len: 20,
            max_attempts: 10_000_000,
        }
    }
}

impl BuildConfig {
    fn length_ok(&self, word: &str) -> bool {
        (self.min_word_len..=self.max_word_len).contains(&word.len())
    }
}

/// Drives repeated synthesis into an ordered, size-exact word sequence.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    pub config: BuildConfig,
}

impl Builder {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Generate exactly `target_count` unique, length-valid words, sorted
    /// ascending lexicographically.
    ///
    /// The entire base-word catalog is seeded into the uniqueness set up
    /// front, so a synthesized duplicate of any base word is never counted
    /// twice. Base words outside the length bounds stay in the set as
    /// dedup seeds but are never emitted. Which base words survive into the
    /// output depends on their lexicographic rank among all accepted words;
    /// a base word is silently dropped when `target_count` smaller words
    /// exist. That is the contract, not an accident.
    pub fn generate<R: Rng>(
        &self,
        synth: &mut Synthesizer<R>,
        target_count: usize,
    ) -> Result<Vec<String>, LexigenError> {
        self.generate_with(synth, target_count, |_| {})
    }

    /// Like [`Builder::generate`], invoking `tick` with the current count of
    /// length-valid words whenever it grows. Used by the CLI progress bar.
    pub fn generate_with<R: Rng, F: FnMut(u64)>(
        &self,
        synth: &mut Synthesizer<R>,
        target_count: usize,
        mut tick: F,
    ) -> Result<Vec<String>, LexigenError> {
        if self.config.min_word_len > self.config.max_word_len {
            return Err(LexigenError::Config(format!(
                "min word length {} exceeds max {}",
                self.config.min_word_len, self.config.max_word_len
            )));
        }

        let mut words: BTreeSet<String> = BTreeSet::new();
        let mut valid = 0usize;
        for base in synth.catalog().base_words {
            if words.insert((*base).to_string()) && self.config.length_ok(base) {
                valid += 1;
            }
        }
        tick(valid.min(target_count) as u64);

        let mut attempts = 0u64;
        while valid < target_count {
            if attempts >= self.config.max_attempts {
                return Err(LexigenError::CatalogExhausted {
                    attempts,
                    have: valid,
                    want: target_count,
                });
            }
            attempts += 1;

            let candidate = synth.next_word();
            if self.config.length_ok(&candidate) && words.insert(candidate) {
                valid += 1;
                tick(valid as u64);
            }
        }

        // BTreeSet iterates in ascending order already.
        Ok(words
            .into_iter()
            .filter(|w| self.config.length_ok(w))
            .take(target_count)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use quickcheck::quickcheck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small() -> Catalog {
        Catalog {
            prefixes: &["un", "re", "pre"],
            suffixes: &["ing", "ed", "ly"],
            middle_parts: &["ward", "ship"],
            base_words: &["cat", "dog", "fish", "elephant", "ox"],
        }
    }

    fn generate(catalog: &Catalog, target: usize, seed: u64) -> Vec<String> {
        let mut synth = Synthesizer::new(catalog, StdRng::seed_from_u64(seed));
        Builder::default().generate(&mut synth, target).unwrap()
    }

    #[test]
    fn short_base_word_is_filtered_and_one_filler_is_synthesized() {
        // "ox" violates the minimum length, leaving four qualifying base
        // words; the fifth entry must be synthesized.
        let catalog = small();
        let out = generate(&catalog, 5, 11);
        assert_eq!(out.len(), 5);
        assert!(!out.contains(&"ox".to_string()));
        for base in ["cat", "dog", "fish", "elephant"] {
            assert!(out.contains(&base.to_string()), "missing base word {base}");
        }
    }

    #[test]
    fn target_zero_yields_empty_sequence() {
        let catalog = small();
        assert!(generate(&catalog, 0, 1).is_empty());
    }

    #[test]
    fn output_is_sorted_unique_and_length_bounded() {
        let catalog = Catalog::english();
        let out = generate(&catalog, 500, 42);
        assert_eq!(out.len(), 500);
        for pair in out.windows(2) {
            assert!(pair[0] < pair[1], "not strictly ascending: {pair:?}");
        }
        for w in &out {
            assert!((3..=20).contains(&w.len()), "bad length: {w:?}");
        }
    }

    #[test]
    fn tiny_catalog_fails_with_catalog_exhausted() {
        let catalog = Catalog {
            prefixes: &["un"],
            suffixes: &["ly"],
            middle_parts: &["mid"],
            base_words: &["core"],
        };
        let mut synth = Synthesizer::new(&catalog, StdRng::seed_from_u64(5));
        let builder = Builder::new(BuildConfig {
            max_attempts: 10_000,
            ..BuildConfig::default()
        });
        // The reachable space is far smaller than 1000 unique words.
        match builder.generate(&mut synth, 1000) {
            Err(LexigenError::CatalogExhausted { attempts, want, .. }) => {
                assert_eq!(attempts, 10_000);
                assert_eq!(want, 1000);
            }
            other => panic!("expected CatalogExhausted, got {other:?}"),
        }
    }

    #[test]
    fn invalid_length_bounds_are_rejected() {
        let catalog = small();
        let mut synth = Synthesizer::new(&catalog, StdRng::seed_from_u64(6));
        let builder = Builder::new(BuildConfig {
            min_word_len: 21,
            max_word_len: 20,
            max_attempts: 100,
        });
        assert!(matches!(
            builder.generate(&mut synth, 1),
            Err(LexigenError::Config(_))
        ));
    }

    quickcheck! {
        fn prop_invariants_hold_for_small_targets(seed: u64, n: u8) -> bool {
            let target = n as usize;
            let catalog = Catalog::english();
            let out = generate(&catalog, target, seed);
            out.len() == target
                && out.windows(2).all(|p| p[0] < p[1])
                && out.iter().all(|w| (3..=20).contains(&w.len()))
        }
    }
}
