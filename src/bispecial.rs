use crate::letter::{Alphabet, Letter};
use crate::word::Word;

/// Classifies factors of one reference word as bispecial.
///
/// A factor `u` is bispecial when at least two distinct letters extend it
/// on the left (`a u` occurs in the reference word) and at least two on
/// the right (`u b` occurs). This is the standard special-factor notion;
/// the stricter variant requiring every alphabet letter on both sides is
/// deliberately not used.
pub struct BispecialDetector<'a> {
    word: &'a Word,
    alphabet: &'a Alphabet,
}

impl<'a> BispecialDetector<'a> {
    /// Creates a detector over one reference word and alphabet.
    pub fn new(word: &'a Word, alphabet: &'a Alphabet) -> Self {
        Self { word, alphabet }
    }

    /// Returns the letters `a` such that `a factor` occurs, in ascending
    /// code order.
    pub fn left_extensions(&self, factor: &Word) -> Vec<Letter> {
        self.alphabet
            .letters()
            .filter(|&a| self.occurs_padded(Some(a), factor, None))
            .collect()
    }

    /// Returns the letters `b` such that `factor b` occurs, in ascending
    /// code order.
    pub fn right_extensions(&self, factor: &Word) -> Vec<Letter> {
        self.alphabet
            .letters()
            .filter(|&b| self.occurs_padded(None, factor, Some(b)))
            .collect()
    }

    /// Returns true when the factor has at least two left and two right
    /// extensions in the reference word.
    pub fn is_bispecial(&self, factor: &Word) -> bool {
        self.left_extensions(factor).len() >= 2 && self.right_extensions(factor).len() >= 2
    }

    /// Filters `candidates` down to the bispecial ones, preserving the
    /// input order.
    pub fn all_bispecial(&self, candidates: &[Word]) -> Vec<Word> {
        candidates
            .iter()
            .filter(|factor| self.is_bispecial(factor))
            .cloned()
            .collect()
    }

    /// Tests whether the factor padded by the given letters occurs in the
    /// reference word.
    fn occurs_padded(&self, left: Option<Letter>, factor: &Word, right: Option<Letter>) -> bool {
        let mut parts = Vec::with_capacity(3);
        if let Some(a) = left {
            parts.push(Word::from_letter(a));
        }
        parts.push(factor.clone());
        if let Some(b) = right {
            parts.push(Word::from_letter(b));
        }

        !self.word.occurrences(&Word::concat(&parts)).is_empty()
    }
}
