use crate::error::Result;
use crate::morphism::Morphism;
use crate::word::Word;
use ahash::AHashSet;

/// Filters bispecial factors down to the irreducible subset.
///
/// The input must be sorted ascending by length, ties broken
/// lexicographically. A factor `w` is reducible when some strictly shorter
/// candidate `v` earlier in the list satisfies `phi^k(v) == w` for an
/// exponent `k >= 1`; such a `w` is merely the image of a shorter
/// bispecial factor and is dropped. The output keeps the survivors in
/// their original relative order.
///
/// The candidate-times-exponent search is quadratic in the number of
/// factors. Inputs are short words over small alphabets, so the naive scan
/// is the contract and is not optimized.
pub fn filter_irreducible(factors: &[Word], phi: &Morphism) -> Result<Vec<Word>> {
    let mut irreducible = Vec::new();

    for word in factors {
        if is_irreducible(word, factors, phi)? {
            irreducible.push(word.clone());
        }
    }

    Ok(irreducible)
}

/// Tests one factor against every strictly shorter candidate, in list
/// order.
fn is_irreducible(word: &Word, candidates: &[Word], phi: &Morphism) -> Result<bool> {
    for candidate in candidates {
        if candidate.len() >= word.len() {
            // Candidates are length-sorted; nothing shorter follows.
            break;
        }
        if reduces_to(word, candidate, phi)? {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Tests whether some power `phi^k`, `k >= 1`, maps `candidate` onto
/// `word`.
///
/// The exponent loop stops once the image outgrows `word`. A morphism that
/// does not grow `candidate` (the identity, letter permutations, erasing
/// images) instead revisits some word of bounded length; the seen-set cuts
/// that cycle, so the search terminates for every morphism.
fn reduces_to(word: &Word, candidate: &Word, phi: &Morphism) -> Result<bool> {
    let mut seen = AHashSet::new();
    let mut image = candidate.clone();

    loop {
        image = phi.apply(&image)?;

        if image.len() > word.len() {
            return Ok(false);
        }
        if image.len() == word.len() && image == *word {
            return Ok(true);
        }
        if !seen.insert(image.clone()) {
            return Ok(false);
        }
    }
}
