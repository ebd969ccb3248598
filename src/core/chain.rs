//! Chain construction — context windows mapped to observed successors.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A trained Markov chain over word tokens.
///
/// Maps every N-token context window observed in the corpus to the list of
/// tokens that immediately followed it. Successor lists keep duplicates on
/// purpose: a token that followed a context three times appears three times,
/// so uniform sampling over the list reproduces the empirical frequencies.
///
/// Built in a single pass and never mutated afterwards; shared references
/// can be read concurrently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chain {
    /// Markov order: number of preceding tokens used as context.
    order: usize,
    /// Context window → every token observed immediately after it, in
    /// corpus order.
    successors: FxHashMap<Vec<String>, Vec<String>>,
}

impl Chain {
    /// Build a chain of the given order from an ordered token sequence.
    ///
    /// Slides a window of width `order + 1` across the corpus; the leading
    /// `order` tokens form the context key and the trailing token is
    /// appended to that key's successor list. A corpus shorter than
    /// `order + 1` tokens produces an empty chain.
    ///
    /// # Panics
    /// Panics if `order` is zero.
    pub fn from_corpus(corpus: &[String], order: usize) -> Self {
        assert!(order >= 1, "markov order must be at least 1");

        let mut successors: FxHashMap<Vec<String>, Vec<String>> = FxHashMap::default();

        for window in corpus.windows(order + 1) {
            let key = window[..order].to_vec();
            let next = window[order].clone();
            successors.entry(key).or_default().push(next);
        }

        Self { order, successors }
    }

    /// The order this chain was built with.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Successor tokens observed after `context`, or `None` if the window
    /// never occurs in the corpus (or never occurs with a following token).
    pub fn successors(&self, context: &[String]) -> Option<&[String]> {
        self.successors.get(context).map(Vec::as_slice)
    }

    /// Number of distinct context windows.
    pub fn len(&self) -> usize {
        self.successors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    /// Iterate over every context window and its successor list.
    pub fn iter(&self) -> impl Iterator<Item = (&[String], &[String])> {
        self.successors
            .iter()
            .map(|(k, v)| (k.as_slice(), v.as_slice()))
    }
}
