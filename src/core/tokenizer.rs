//! Tokenizer — splits raw corpus text into word tokens.

/// Split raw text into an ordered sequence of word tokens.
///
/// Line terminators and tabs become spaces, other control characters are
/// stripped, and the result is split on spaces with empty tokens dropped.
/// No case folding or punctuation stripping happens here: keeping the
/// surface form of the source text is what preserves its voice in the
/// generated output.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .filter_map(|c| match c {
            '\n' | '\r' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect();

    cleaned
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}
