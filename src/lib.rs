//! # Bispecial - Special-Factor Analysis of Finite Words
//!
//! A Rust implementation of bispecial-factor analysis for finite words
//! over a small dense alphabet, as used in combinatorics on words.
//!
//! Given a reference word, a substitution morphism and a power `k`, the
//! crate expands the word to `phi^k(reference)`, enumerates its distinct
//! factors, detects the bispecial ones (factors extendable by at least two
//! letters on each side), builds per-factor extension graphs, and filters
//! the bispecial set down to the irreducible factors, those that are not
//! the morphism image of a strictly shorter bispecial factor.
//!
//! ## Example
//!
//! ```
//! use bispecial_rs::{Analysis, AnalysisConfig};
//!
//! // The Fibonacci morphism: 0 -> 01, 1 -> 0.
//! let config = AnalysisConfig {
//!     alphabet_size: 2,
//!     reference_word: vec![0],
//!     morphism_table: vec![vec![0, 1], vec![0]],
//!     morphism_power: 4,
//!     max_factor_length: 3,
//! };
//!
//! let analysis = Analysis::new(&config).unwrap();
//! assert_eq!(analysis.word().len(), 8);
//!
//! for factor in analysis.bispecial_factors() {
//!     println!("{factor}");
//! }
//! ```
//!
//! ## Scope
//!
//! - Words are finite, immutable values over the dense alphabet
//!   `{0, .., alphabet_size - 1}`; pattern search is exact.
//! - Every query is a pure, single-threaded batch computation over state
//!   built once per run; nothing is mutated after construction.

mod analysis;
mod bispecial;
mod error;
mod extension_graph;
mod letter;
mod morphism;
mod reducibility;
mod word;

#[cfg(test)]
mod tests;

pub use analysis::{Analysis, AnalysisConfig, QueryMode};
pub use bispecial::BispecialDetector;
pub use error::{DomainError, Result};
pub use extension_graph::ExtensionGraph;
pub use letter::{Alphabet, Letter};
pub use morphism::Morphism;
pub use reducibility::filter_irreducible;
pub use word::Word;
