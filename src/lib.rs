//! Wordchain — Markov chain text generation from word corpora.
//!
//! Builds a transition table from an ordered token sequence (context windows
//! of N consecutive words mapped to every word observed following them) and
//! generates text by walking the table with uniform random sampling until a
//! target character length is reached.

pub mod core;
