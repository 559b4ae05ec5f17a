//! Randomized single-word synthesis over the catalog.

use rand::Rng;

use crate::catalog::{Catalog, WordSet};

/// One of the five construction rules for a candidate word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// A base word taken verbatim.
    Base,
    /// Prefix + base word.
    Prefixed,
    /// Base word + suffix.
    Suffixed,
    /// Two independently picked base words (may coincide).
    Compound,
    /// A middle part, each side independently modified with probability 1/2.
    Modified,
}

impl Strategy {
    /// All strategies in selection order.
    pub const ALL: [Strategy; 5] = [
        Strategy::Base,
        Strategy::Prefixed,
        Strategy::Suffixed,
        Strategy::Compound,
        Strategy::Modified,
    ];

    /// Choose one strategy uniformly at random.
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Produces one candidate word per call.
///
/// No semantic validation is performed; degenerate or nonsensical output is
/// accepted by design and filtered only by length downstream.
pub struct Synthesizer<'a, R: Rng> {
    catalog: &'a Catalog,
    rng: R,
}

impl<'a, R: Rng> Synthesizer<'a, R> {
    pub fn new(catalog: &'a Catalog, rng: R) -> Self {
        Self { catalog, rng }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Synthesize one candidate word using a randomly chosen strategy.
    pub fn next_word(&mut self) -> String {
        let strategy = Strategy::choose(&mut self.rng);
        self.word_with(strategy)
    }

    /// Synthesize one candidate word using a fixed strategy.
    pub fn word_with(&mut self, strategy: Strategy) -> String {
        let cat = self.catalog;
        let rng = &mut self.rng;
        match strategy {
            Strategy::Base => cat.pick(WordSet::BaseWords, rng).to_string(),
            Strategy::Prefixed => {
                let prefix = cat.pick(WordSet::Prefixes, rng);
                let base = cat.pick(WordSet::BaseWords, rng);
                format!("{prefix}{base}")
            }
            Strategy::Suffixed => {
                let base = cat.pick(WordSet::BaseWords, rng);
                let suffix = cat.pick(WordSet::Suffixes, rng);
                format!("{base}{suffix}")
            }
            Strategy::Compound => {
                let first = cat.pick(WordSet::BaseWords, rng);
                let second = cat.pick(WordSet::BaseWords, rng);
                format!("{first}{second}")
            }
            Strategy::Modified => {
                let mut word = cat.pick(WordSet::MiddleParts, rng).to_string();
                if rng.gen_bool(0.5) {
                    word = format!("{}{}", cat.pick(WordSet::Prefixes, rng), word);
                }
                if rng.gen_bool(0.5) {
                    word.push_str(cat.pick(WordSet::Suffixes, rng));
                }
                word
            }
        }
    }
}
