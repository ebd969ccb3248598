//! Walker — random-walk text generation over a built chain.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::core::chain::Chain;

/// Default target output length in characters.
pub const DEFAULT_TARGET_LEN: usize = 140;

#[derive(Debug, Error)]
pub enum WalkError {
    #[error("corpus is empty or too short to build any context window")]
    EmptyCorpus,
    #[error("no successors recorded for context {0:?}")]
    MissingContext(Vec<String>),
}

/// Generate text by walking the chain from a random starting context.
///
/// The start index is drawn uniformly from `[0, corpus.len() - order - 1]`.
/// The upper bound stops one short of the last context window in the corpus:
/// the final window has no following token and therefore no chain entry, so
/// every start drawn here is guaranteed to resolve.
///
/// Passing a seeded [`StdRng`] makes the output reproducible.
pub fn generate(
    chain: &Chain,
    corpus: &[String],
    target_len: usize,
    rng: &mut StdRng,
) -> Result<String, WalkError> {
    let order = chain.order();
    if chain.is_empty() || corpus.len() < order + 1 {
        return Err(WalkError::EmptyCorpus);
    }

    let start = rng.gen_range(0..corpus.len() - order);
    walk_from(chain, corpus, start, target_len, rng)
}

/// Walk the chain starting from the context window at `start`.
///
/// Seeds the output with the `order` tokens at `[start, start + order)`,
/// then repeatedly samples a uniform successor for the current context and
/// slides the window, until the space-joined output reaches `target_len`
/// characters. The loop may overshoot the target by the length of the last
/// appended token; the result is never truncated.
///
/// Errors with [`WalkError::MissingContext`] if the walk reaches a context
/// the chain has no entry for. `generate` bounds its start choice so this
/// cannot happen there, but a caller-supplied `start` at the corpus's final
/// window will hit it.
///
/// # Panics
/// Panics if `start + order` exceeds the corpus length.
pub fn walk_from(
    chain: &Chain,
    corpus: &[String],
    start: usize,
    target_len: usize,
    rng: &mut StdRng,
) -> Result<String, WalkError> {
    let order = chain.order();
    assert!(
        start + order <= corpus.len(),
        "start window out of corpus bounds"
    );

    let mut context: Vec<String> = corpus[start..start + order].to_vec();
    let mut output: Vec<String> = context.clone();
    // Rendered length in characters, tracked incrementally: tokens plus the
    // single spaces joining them.
    let mut char_len: usize =
        output.iter().map(|t| t.chars().count()).sum::<usize>() + output.len().saturating_sub(1);

    while char_len < target_len {
        let options = chain
            .successors(&context)
            .ok_or_else(|| WalkError::MissingContext(context.clone()))?;
        // Successor lists are never empty once present in the chain.
        let next = options
            .choose(rng)
            .ok_or_else(|| WalkError::MissingContext(context.clone()))?
            .clone();

        char_len += 1 + next.chars().count();
        output.push(next.clone());

        context.remove(0);
        context.push(next);
    }

    Ok(output.join(" "))
}
