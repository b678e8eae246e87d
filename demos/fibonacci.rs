use bispecial_rs::{Analysis, AnalysisConfig, QueryMode};
use std::env;

/// Demo driver: special-factor analysis of the Fibonacci word.
///
/// Usage: cargo run --example fibonacci [power]
fn main() {
    let args: Vec<String> = env::args().collect();

    let power: u32 = match args.get(1) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("Invalid power \"{raw}\", expected a non-negative integer.");
            std::process::exit(1);
        }),
        None => 5,
    };

    // The Fibonacci morphism: 0 -> 01, 1 -> 0, expanded from "0".
    let config = AnalysisConfig {
        alphabet_size: 2,
        reference_word: vec![0],
        morphism_table: vec![vec![0, 1], vec![0]],
        morphism_power: power,
        max_factor_length: 8,
    };

    let analysis = Analysis::new(&config).unwrap_or_else(|err| {
        eprintln!("Invalid configuration: {err}");
        std::process::exit(1);
    });

    println!("Word after phi^{power}: {}", analysis.word());
    println!();

    println!("Bispecial factors (length <= {}):", analysis.max_factor_length());
    let bispecial = analysis.query(QueryMode::AllBispecialFactors);
    for factor in &bispecial {
        println!("{factor}");
    }

    match analysis.irreducible_factors() {
        Ok(irreducible) => {
            println!("\nIrreducible bispecial factors:");
            for factor in &irreducible {
                println!("{factor}");
            }
        }
        Err(err) => {
            eprintln!("Reducibility filter failed: {err}");
            std::process::exit(1);
        }
    }

    if let Some(factor) = bispecial.first() {
        println!("\nExtension graph of {factor}:");
        println!("{}", analysis.extension_graph(factor));
    }
}
