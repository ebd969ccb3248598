//! Core generation algorithms: tokenization, chain construction, walking.

pub mod chain;
pub mod tokenizer;
pub mod walker;
