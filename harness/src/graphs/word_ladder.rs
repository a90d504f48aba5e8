//! `WordLadder`: words linked by single-letter substitutions.
//!
//! Only the dictionary is stored; edges are computed on demand by trying
//! every letter of the dictionary's alphabet at every position.

use std::collections::{BTreeSet, HashSet};
use std::io::BufRead;
use std::path::Path;

use rand::Rng;
use tracing::debug;

use pathfind_kernel::edge::DirectedEdge;
use pathfind_search::{DirectedGraph, NodeSet, ParseNodeError};

use super::{open, GraphLoadError};
use crate::describe::{describe_outgoing, sample_nodes, SAMPLE_SIZE};

#[derive(Debug, Clone, Default)]
pub struct WordLadder {
    dictionary: HashSet<String>,
    /// Ordered so that edges come out in the same order on every run.
    alphabet: BTreeSet<char>,
}

impl WordLadder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `word` in lowercase if it consists of letters only.
    ///
    /// Returns whether the word was accepted.
    pub fn add_word(&mut self, word: &str) -> bool {
        if word.is_empty() || !word.chars().all(char::is_alphabetic) {
            return false;
        }
        let word = word.to_lowercase();
        self.alphabet.extend(word.chars());
        self.dictionary.insert(word);
        true
    }

    /// Read a dictionary with one word per line. Lines starting with `#` are
    /// comments; other lines that are not a single word are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GraphLoadError::Read`] if reading fails.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, GraphLoadError> {
        let mut ladder = Self::new();
        let mut skipped = 0usize;
        for line in reader.lines() {
            let line = line?;
            if line.starts_with('#') {
                continue;
            }
            let word = line.trim();
            if !word.is_empty() && !ladder.add_word(word) {
                skipped += 1;
            }
        }
        debug!(
            words = ladder.dictionary.len(),
            alphabet = ladder.alphabet.len(),
            skipped,
            "word ladder loaded"
        );
        Ok(ladder)
    }

    /// Read a dictionary from the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphLoadError::Open`] if the file cannot be opened, and
    /// the errors of [`WordLadder::from_reader`] otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GraphLoadError> {
        Self::from_reader(open(path.as_ref())?)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    #[must_use]
    pub fn alphabet(&self) -> String {
        self.alphabet.iter().collect()
    }

    pub fn summary<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut lines = vec![
            format!("Word ladder graph with {} words", self.dictionary.len()),
            format!("Alphabet: {}", self.alphabet()),
            String::new(),
            "Random example words with ladder steps:".to_string(),
        ];
        let sample = sample_nodes(self, rng, SAMPLE_SIZE);
        lines.extend(describe_outgoing(self, sample, SAMPLE_SIZE));
        lines.join("\n")
    }
}

impl DirectedGraph for WordLadder {
    type Node = String;

    #[allow(clippy::unnecessary_literal_bound)]
    fn graph_id(&self) -> &str {
        "word_ladder"
    }

    fn nodes(&self) -> NodeSet<String> {
        NodeSet::Finite(self.dictionary.clone())
    }

    fn outgoing_edges(&self, word: &String) -> Vec<DirectedEdge<String>> {
        let mut letters: Vec<char> = word.chars().collect();
        let mut edges = Vec::new();
        for i in 0..letters.len() {
            let original = letters[i];
            for &c in &self.alphabet {
                if c == original {
                    continue;
                }
                letters[i] = c;
                let candidate: String = letters.iter().collect();
                if self.dictionary.contains(&candidate) {
                    edges.push(DirectedEdge::unit(word.clone(), candidate));
                }
            }
            letters[i] = original;
        }
        edges
    }

    /// Number of positions where the words differ. Words of different
    /// lengths are never connected, so the length difference is added.
    #[allow(clippy::cast_precision_loss)]
    fn guess_cost(&self, from: &String, to: &String) -> f64 {
        let mismatched = from
            .chars()
            .zip(to.chars())
            .filter(|(a, b)| a != b)
            .count();
        let extra = from.chars().count().abs_diff(to.chars().count());
        (mismatched + extra) as f64
    }

    fn parse_node(&self, text: &str) -> Result<String, ParseNodeError> {
        Ok(text.trim().to_lowercase())
    }
}
