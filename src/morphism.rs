use crate::error::{DomainError, Result};
use crate::letter::{Alphabet, Letter};
use crate::word::Word;

/// A substitution morphism: each letter maps to an image word, extended
/// homomorphically over concatenation.
///
/// `phi(a1 .. an) = phi(a1) .. phi(an)`, `phi^0` is the identity and
/// `phi^k` applies `phi` to `phi^(k-1)`.
///
/// Images live in a dense table indexed by letter code. The table is
/// checked to be total over the alphabet at construction, so a validated
/// morphism never yields a partially substituted word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morphism {
    images: Vec<Word>,
}

impl Morphism {
    /// Creates a morphism from the image of each letter, in code order.
    ///
    /// Fails when the table is not exactly one image per alphabet letter,
    /// or when any image uses a letter outside the alphabet.
    pub fn new(images: Vec<Word>, alphabet: &Alphabet) -> Result<Self> {
        if images.len() != alphabet.size() {
            return Err(DomainError::MorphismArity {
                expected: alphabet.size(),
                actual: images.len(),
            });
        }

        for image in &images {
            alphabet.require_word(image)?;
        }

        Ok(Morphism { images })
    }

    /// Creates the identity morphism on `alphabet`: `phi(a) = a`.
    pub fn identity(alphabet: &Alphabet) -> Self {
        Morphism {
            images: alphabet.letters().map(Word::from_letter).collect(),
        }
    }

    /// Returns the image of one letter.
    ///
    /// Fails with [`DomainError::MissingImage`] for letters outside the
    /// table.
    pub fn image(&self, letter: Letter) -> Result<&Word> {
        self.images
            .get(letter.index())
            .ok_or(DomainError::MissingImage {
                letter: letter.code(),
            })
    }

    /// Applies the morphism once: every letter is replaced by its image
    /// and the images are concatenated in order.
    ///
    /// Fails before producing anything if a letter of `word` has no image.
    pub fn apply(&self, word: &Word) -> Result<Word> {
        let mut images = Vec::with_capacity(word.len());
        for &letter in word.letters() {
            images.push(self.image(letter)?.clone());
        }
        Ok(Word::concat(&images))
    }

    /// Applies the morphism `k` times in sequence.
    ///
    /// `k = 0` returns a value-equal copy of the input.
    pub fn apply_power(&self, word: &Word, k: u32) -> Result<Word> {
        let mut current = word.clone();
        for _ in 0..k {
            current = self.apply(&current)?;
        }
        Ok(current)
    }
}
