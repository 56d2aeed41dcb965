use crate::config::Config;
use crate::geometry::{keyboard_path, path_length, resample, KeyLayout, Point};
use crate::lm::SessionModel;
use crate::trie::Trie;
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::{debug, info};

/// A word's layout-derived gesture template.
#[derive(Debug, Clone, PartialEq)]
pub struct WordPath {
    pub points: Vec<Point>,
    pub length: f32,
}

/// Per-word dictionary payload. `path` is `None` for words that cannot be
/// mapped onto the active layout; those stay available for lookup and typed
/// search but are never gesture candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct WordEntry {
    pub path: Option<WordPath>,
    pub static_freq: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub word: String,
    pub score: f64,
}

/// One keyboard session's predictive-text state: the dictionary trie, the
/// active layout geometry, and the adaptive language model. All operations
/// are synchronous; callers needing concurrency give each session its own
/// engine.
pub struct Engine {
    trie: Trie<WordEntry>,
    layout: KeyLayout,
    session: SessionModel,
    pub config: Config,
}

impl Engine {
    pub fn new(layout: KeyLayout, config: Config) -> Self {
        Self {
            trie: Trie::new(),
            layout,
            session: SessionModel::new(),
            config,
        }
    }

    pub fn layout(&self) -> &KeyLayout {
        &self.layout
    }

    pub fn session(&self) -> &SessionModel {
        &self.session
    }

    pub fn vocabulary_len(&self) -> usize {
        self.trie.len()
    }

    pub fn words(&self) -> &[String] {
        self.trie.words()
    }

    fn make_entry(&self, word: &str, static_freq: f64) -> WordEntry {
        let path = keyboard_path(word, &self.layout).map(|points| {
            let length = path_length(&points);
            WordPath { points, length }
        });
        WordEntry { path, static_freq }
    }

    /// Loads `(word, static_frequency)` pairs, computing each word's
    /// keyboard path from the active layout. Re-loading a word overwrites
    /// its entry without duplicating it.
    pub fn load_vocabulary(&mut self, entries: impl IntoIterator<Item = (String, f64)>) {
        let mut loaded = 0usize;
        for (word, freq) in entries {
            let word = word.to_lowercase();
            let entry = self.make_entry(&word, freq);
            self.trie.insert(&word, entry);
            loaded += 1;
        }
        info!(
            "Vocabulary load: {} entries, {} words total",
            loaded,
            self.trie.len()
        );
    }

    /// Swaps the active layout and recomputes every stored path. Static
    /// frequencies are layout-independent and untouched.
    pub fn set_layout(&mut self, layout: KeyLayout) {
        self.layout = layout;
        let words: Vec<String> = self.trie.words().to_vec();
        for word in words {
            let path = keyboard_path(&word, &self.layout).map(|points| {
                let length = path_length(&points);
                WordPath { points, length }
            });
            if let Some(entry) = self.trie.get_mut(&word) {
                entry.path = path;
            }
        }
        info!("Layout change: rebuilt paths for {} words", self.trie.len());
    }

    pub fn lookup(&self, word: &str) -> Option<&WordEntry> {
        self.trie.get(&word.to_lowercase())
    }

    /// p(word | prev) from the session model, using the word's stored
    /// static frequency (0 for out-of-dictionary words).
    pub fn ngram_probability(&self, word: &str, prev: Option<&str>) -> f64 {
        let static_freq = self.trie.get(word).map(|e| e.static_freq).unwrap_or(0.0);
        self.session
            .probability(word, prev, static_freq, &self.config.weights)
    }

    /// Ranked corrections of a typed prefix: bounded edit-distance search
    /// with each extra edit decaying the score by `edit_decay_base`.
    pub fn correct(&self, prefix: &str, prev: Option<&str>, max_cost: usize) -> Vec<Candidate> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let prefix = prefix.to_lowercase();
        let hits = self.trie.search_correction(&prefix, max_cost);
        self.rank_typed(hits, prev)
    }

    /// Ranked completions of a typed prefix: every word under a
    /// fuzzy-matched prefix, scored like corrections.
    pub fn predict(&self, prefix: &str, prev: Option<&str>, max_cost: usize) -> Vec<Candidate> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let prefix = prefix.to_lowercase();
        let hits = self.trie.search_prediction(&prefix, max_cost);
        self.rank_typed(hits, prev)
    }

    fn rank_typed(&self, hits: Vec<(String, usize)>, prev: Option<&str>) -> Vec<Candidate> {
        let base = self.config.weights.edit_decay_base;
        let candidates = hits
            .into_iter()
            .map(|(word, dist)| {
                let score = base.powi(dist as i32) * self.ngram_probability(&word, prev);
                Candidate { word, score }
            })
            .collect();
        sort_descending(candidates)
    }

    /// Language-model-only ranking of the whole vocabulary; what the
    /// suggestion row shows right after a commit, before any new input.
    pub fn guesses(&self, prev: Option<&str>) -> Vec<Candidate> {
        let candidates = self
            .trie
            .words()
            .iter()
            .map(|word| Candidate {
                word: word.clone(),
                score: self.ngram_probability(word, prev),
            })
            .collect();
        sort_descending(candidates)
    }

    /// Ranked matches for one committed swipe trajectory.
    ///
    /// Cheap rejection first: a candidate's stored path must start and end
    /// within one key of the gesture's endpoints and have a length within
    /// the configured ratio band of the gesture's. Survivors are resampled
    /// to the gesture's sample count and scored by mean point distance.
    pub fn score_gesture(&self, gesture: &[Point], prev: Option<&str>) -> Vec<Candidate> {
        if gesture.len() < 2 {
            return Vec::new();
        }
        let weights = &self.config.weights;
        let n = gesture.len();
        let gesture_len = path_length(gesture);
        let gesture_pts = resample(gesture, n);
        let first = gesture[0];
        let last = gesture[n - 1];

        let mut candidates: Vec<Candidate> = self
            .trie
            .words()
            .par_iter()
            .filter_map(|word| {
                let entry = self.trie.get(word)?;
                let path = entry.path.as_ref()?;
                let start = *path.points.first()?;
                let end = *path.points.last()?;

                if (start.x - first.x).abs() > self.layout.key_width
                    || (start.y - first.y).abs() > self.layout.key_height
                {
                    return None;
                }
                if (end.x - last.x).abs() > self.layout.key_width
                    || (end.y - last.y).abs() > self.layout.key_height
                {
                    return None;
                }
                let len_lo = weights.length_ratio_min * gesture_len;
                let len_hi = weights.length_ratio_max * gesture_len;
                if path.length < len_lo || path.length > len_hi {
                    return None;
                }

                let template = resample(&path.points, n);
                let dist = mean_point_distance(&gesture_pts, &template);
                let score =
                    (-dist / weights.gesture_decay).exp() * self.ngram_probability(word, prev);
                Some(Candidate {
                    word: word.clone(),
                    score,
                })
            })
            .collect();

        candidates = sort_descending(candidates);
        debug!(
            "Gesture scan: {} samples, {} candidates",
            n,
            candidates.len()
        );
        candidates
    }

    /// Records a committed word: inserts it into the dictionary if new
    /// (static frequency 0, path from the active layout) and updates the
    /// session counters. The only mutation path into the trie after load.
    pub fn commit(&mut self, word: &str, prev: Option<&str>) {
        let word = word.to_lowercase();
        if word.is_empty() {
            return;
        }
        if !self.trie.contains(&word) {
            let entry = self.make_entry(&word, 0.0);
            self.trie.insert(&word, entry);
            debug!("Commit added new word '{}'", word);
        }
        self.session.observe(&word, prev);
    }
}

fn mean_point_distance(a: &[Point], b: &[Point]) -> f64 {
    if a.is_empty() {
        return 0.0;
    }
    let sum: f32 = a.iter().zip(b).map(|(p, q)| p.dist(q)).sum();
    (sum / a.len() as f32) as f64
}

fn sort_descending(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    candidates
}
