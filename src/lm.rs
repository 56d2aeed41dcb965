use crate::config::ScoringWeights;
use std::collections::HashMap;

/// Session-local n-gram counters, adapted online as words are committed.
/// One instance per logical keyboard session; never persisted.
#[derive(Debug, Clone)]
pub struct SessionModel {
    /// Total committed-word count.
    nograms: u64,
    unigrams: HashMap<String, u64>,
    bigrams: HashMap<(String, String), u64>,
}

impl SessionModel {
    /// Starts with a single bootstrapped count for "the" so the unigram
    /// denominator is never zero before the first commit.
    pub fn new() -> Self {
        let mut unigrams = HashMap::new();
        unigrams.insert("the".to_string(), 1);
        Self {
            nograms: 1,
            unigrams,
            bigrams: HashMap::new(),
        }
    }

    pub fn committed_count(&self) -> u64 {
        self.nograms
    }

    pub fn unigram_count(&self, word: &str) -> u64 {
        self.unigrams.get(word).copied().unwrap_or(0)
    }

    pub fn bigram_count(&self, prev: &str, word: &str) -> u64 {
        self.bigrams
            .get(&(prev.to_string(), word.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Records one committed word, with its predecessor when one exists.
    pub fn observe(&mut self, word: &str, prev: Option<&str>) {
        self.nograms += 1;
        *self.unigrams.entry(word.to_string()).or_insert(0) += 1;
        if let Some(prev) = prev.filter(|p| !p.is_empty()) {
            *self
                .bigrams
                .entry((prev.to_string(), word.to_string()))
                .or_insert(0) += 1;
        }
    }

    /// p(word | prev): additively smoothed session bigram and unigram rates
    /// interpolated with the word's static corpus frequency.
    pub fn probability(
        &self,
        word: &str,
        prev: Option<&str>,
        static_freq: f64,
        weights: &ScoringWeights,
    ) -> f64 {
        let distinct = self.unigrams.len() as f64;
        let prev = prev.unwrap_or("");
        let bigram = self.bigram_count(prev, word) as f64;
        let prev_unigram = self.unigram_count(prev) as f64;
        let unigram = self.unigram_count(word) as f64;

        weights.weight_bigram * (bigram + 1.0) / (prev_unigram + distinct)
            + weights.weight_unigram * (unigram + 1.0) / (self.nograms as f64 + distinct)
            + weights.weight_static * static_freq
    }
}

impl Default for SessionModel {
    fn default() -> Self {
        Self::new()
    }
}
