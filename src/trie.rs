use std::collections::HashMap;

const ROOT: usize = 0;

struct Node<V> {
    children: HashMap<char, usize>,
    // Set only on terminal nodes; always equals the root-to-node path.
    word: Option<String>,
    value: Option<V>,
}

impl<V> Node<V> {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            word: None,
            value: None,
        }
    }
}

/// Character-keyed prefix tree over an arena of nodes. Supports exact
/// lookup plus bounded-edit-distance correction and prediction search via a
/// Wagner-Fischer DP row propagated down each edge.
///
/// The insertion-order word list doubles as the full-vocabulary iterator;
/// terminal nodes and that list stay in bijection (re-inserting a word
/// overwrites its value without duplicating the list entry).
pub struct Trie<V> {
    nodes: Vec<Node<V>>,
    words: Vec<String>,
}

impl<V> Trie<V> {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            words: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All stored words, in insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    fn walk(&self, word: &str) -> Option<usize> {
        let mut idx = ROOT;
        for c in word.chars() {
            idx = *self.nodes[idx].children.get(&c)?;
        }
        Some(idx)
    }

    pub fn get(&self, word: &str) -> Option<&V> {
        let idx = self.walk(word)?;
        self.nodes[idx].value.as_ref()
    }

    pub fn get_mut(&mut self, word: &str) -> Option<&mut V> {
        let idx = self.walk(word)?;
        self.nodes[idx].value.as_mut()
    }

    pub fn insert(&mut self, word: &str, value: V) {
        let mut idx = ROOT;
        for c in word.chars() {
            let next = match self.nodes[idx].children.get(&c) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::new());
                    self.nodes[idx].children.insert(c, child);
                    child
                }
            };
            idx = next;
        }
        if self.nodes[idx].word.as_deref() != Some(word) {
            self.words.push(word.to_string());
        }
        self.nodes[idx].word = Some(word.to_string());
        self.nodes[idx].value = Some(value);
    }

    /// Every stored word within `max_cost` edits (unit-cost insertions,
    /// deletions, substitutions) of `query`, with its edit distance.
    pub fn search_correction(&self, query: &str, max_cost: usize) -> Vec<(String, usize)> {
        let matched = self.fuzzy_walk(query, max_cost);
        matched
            .into_iter()
            .filter_map(|(idx, cost)| self.nodes[idx].word.clone().map(|w| (w, cost)))
            .collect()
    }

    /// Every stored word under a fuzzy-matched *prefix* of `query`, reported
    /// with the prefix's match cost. The prefix cost stands in for the full
    /// word's edit distance; when several matched prefixes reach the same
    /// word the minimum cost wins.
    pub fn search_prediction(&self, query: &str, max_cost: usize) -> Vec<(String, usize)> {
        let matched = self.fuzzy_walk(query, max_cost);
        let mut best: HashMap<String, usize> = HashMap::new();
        let mut stack = Vec::new();
        for (root, cost) in matched {
            stack.push(root);
            while let Some(idx) = stack.pop() {
                if let Some(word) = &self.nodes[idx].word {
                    let entry = best.entry(word.clone()).or_insert(cost);
                    if cost < *entry {
                        *entry = cost;
                    }
                }
                stack.extend(self.nodes[idx].children.values().copied());
            }
        }
        best.into_iter().collect()
    }

    /// DP-row traversal shared by both searches: returns every node whose
    /// row-final cost is within `max_cost`, terminal or not.
    fn fuzzy_walk(&self, query: &str, max_cost: usize) -> Vec<(usize, usize)> {
        let query: Vec<char> = query.chars().collect();
        let first_row: Vec<usize> = (0..=query.len()).collect();
        let mut matched = Vec::new();
        for (&letter, &child) in &self.nodes[ROOT].children {
            self.fuzzy_step(child, letter, &query, &first_row, max_cost, &mut matched);
        }
        matched
    }

    fn fuzzy_step(
        &self,
        idx: usize,
        letter: char,
        query: &[char],
        prev_row: &[usize],
        max_cost: usize,
        matched: &mut Vec<(usize, usize)>,
    ) {
        let columns = query.len() + 1;
        let mut row = Vec::with_capacity(columns);
        row.push(prev_row[0] + 1);
        for col in 1..columns {
            let insert_cost = row[col - 1] + 1;
            let delete_cost = prev_row[col] + 1;
            let replace_cost = if query[col - 1] == letter {
                prev_row[col - 1]
            } else {
                prev_row[col - 1] + 1
            };
            row.push(insert_cost.min(delete_cost).min(replace_cost));
        }

        let final_cost = *row.last().unwrap();
        if final_cost <= max_cost {
            matched.push((idx, final_cost));
        }

        // Edit distance never decreases as the prefix grows, so a row whose
        // minimum exceeds the budget rules out the whole subtree.
        if row.iter().min().copied().unwrap() <= max_cost {
            for (&c, &child) in &self.nodes[idx].children {
                self.fuzzy_step(child, c, query, &row, max_cost, matched);
            }
        }
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}
