//! End-to-end generation tests: raw text → tokens → chain → generated output.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wordchain::core::chain::Chain;
use wordchain::core::tokenizer::tokenize;
use wordchain::core::walker::{self, DEFAULT_TARGET_LEN};

fn fixture_corpus() -> Vec<String> {
    let text = std::fs::read_to_string("tests/fixtures/test_corpus.txt").unwrap();
    tokenize(&text)
}

#[test]
fn tokenizer_produces_clean_tokens() {
    let corpus = fixture_corpus();
    assert!(corpus.len() > 100);
    assert!(corpus.iter().all(|t| !t.is_empty()));
    assert!(corpus.iter().all(|t| !t.contains(' ')));
    // Punctuation rides along with its word
    assert!(corpus.iter().any(|t| t.ends_with('.')));
}

#[test]
fn chains_build_at_several_orders() {
    let corpus = fixture_corpus();
    for order in 1..=3 {
        let chain = Chain::from_corpus(&corpus, order);
        assert!(!chain.is_empty(), "order-{} chain came out empty", order);
        assert_eq!(chain.order(), order);
    }
}

#[test]
fn generate_reaches_default_target_length() {
    let corpus = fixture_corpus();
    let chain = Chain::from_corpus(&corpus, 2);

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let text = walker::generate(&chain, &corpus, DEFAULT_TARGET_LEN, &mut rng).unwrap();
        assert!(
            text.chars().count() >= DEFAULT_TARGET_LEN,
            "seed {} produced {} chars",
            seed,
            text.chars().count()
        );
    }
}

#[test]
fn generate_uses_only_corpus_vocabulary() {
    let corpus = fixture_corpus();
    let chain = Chain::from_corpus(&corpus, 1);

    let mut rng = StdRng::seed_from_u64(3);
    let text = walker::generate(&chain, &corpus, 200, &mut rng).unwrap();
    for word in text.split(' ') {
        assert!(
            corpus.iter().any(|t| t == word),
            "generated token {:?} not in corpus",
            word
        );
    }
}

#[test]
fn generation_is_reproducible_end_to_end() {
    let corpus = fixture_corpus();
    let chain = Chain::from_corpus(&corpus, 2);

    let mut rng1 = StdRng::seed_from_u64(1234);
    let mut rng2 = StdRng::seed_from_u64(1234);
    assert_eq!(
        walker::generate(&chain, &corpus, 300, &mut rng1).unwrap(),
        walker::generate(&chain, &corpus, 300, &mut rng2).unwrap()
    );
}

#[test]
fn every_bounded_start_resolves_in_fixture() {
    let corpus = fixture_corpus();
    for order in [1usize, 2] {
        let chain = Chain::from_corpus(&corpus, order);
        for start in 0..corpus.len() - order {
            assert!(
                chain.successors(&corpus[start..start + order]).is_some(),
                "order-{} start {} has no chain entry",
                order,
                start
            );
        }
    }
}
