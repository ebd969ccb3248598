/// Generate — builds a chain from a corpus file and prints one passage.
///
/// Usage: generate --input <corpus.txt> [--order <n>] [--length <chars>] [--seed <n>]
use std::env;
use std::process;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wordchain::core::chain::Chain;
use wordchain::core::tokenizer::tokenize;
use wordchain::core::walker::{self, DEFAULT_TARGET_LEN};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut input = None;
    let mut order = 2usize;
    let mut length = DEFAULT_TARGET_LEN;
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--input" if i + 1 < args.len() => {
                i += 1;
                input = Some(args[i].clone());
            }
            "--order" if i + 1 < args.len() => {
                i += 1;
                order = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Error: --order must be a positive integer");
                    process::exit(1);
                });
            }
            "--length" if i + 1 < args.len() => {
                i += 1;
                length = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Error: --length must be a character count");
                    process::exit(1);
                });
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = Some(args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Error: --seed must be an unsigned integer");
                    process::exit(1);
                }));
            }
            "--help" | "-h" => {
                println!(
                    "Usage: generate --input <corpus.txt> [--order <n>] [--length <chars>] [--seed <n>]"
                );
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let input_path = input.unwrap_or_else(|| {
        eprintln!("Error: --input is required");
        eprintln!(
            "Usage: generate --input <corpus.txt> [--order <n>] [--length <chars>] [--seed <n>]"
        );
        process::exit(1);
    });

    if order == 0 {
        eprintln!("Error: --order must be at least 1");
        process::exit(1);
    }

    let text = std::fs::read_to_string(&input_path).unwrap_or_else(|e| {
        eprintln!("Error reading input file '{}': {}", input_path, e);
        process::exit(1);
    });

    let corpus = tokenize(&text);
    let chain = Chain::from_corpus(&corpus, order);

    let transition_count: usize = chain.iter().map(|(_, v)| v.len()).sum();
    println!(
        "Built order-{} chain: {} tokens, {} contexts, {} transitions",
        order,
        corpus.len(),
        chain.len(),
        transition_count
    );

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    match walker::generate(&chain, &corpus, length, &mut rng) {
        Ok(text) => println!("\n{}", text),
        Err(e) => {
            eprintln!("Generation failed: {}", e);
            process::exit(1);
        }
    }
}
