use thiserror::Error;

/// Errors raised while validating a run's inputs.
///
/// Every variant is produced before any result is built, never alongside a
/// partial one. The computation is deterministic, so retrying with the same
/// input reproduces the same failure; callers surface the error and halt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The alphabet must contain at least one letter.
    #[error("alphabet size must be positive")]
    InvalidAlphabet,

    /// A letter code fell outside the alphabet.
    #[error("letter {letter} is outside the alphabet [0, {alphabet_size})")]
    InvalidLetter {
        /// The offending letter code.
        letter: u32,
        /// Size of the alphabet it was checked against.
        alphabet_size: u32,
    },

    /// The morphism table does not define exactly one image per letter.
    #[error("morphism table has {actual} entries, expected {expected}")]
    MorphismArity {
        /// The alphabet size the table must cover.
        expected: usize,
        /// How many images were supplied.
        actual: usize,
    },

    /// A word contained a letter with no image under the morphism.
    #[error("letter {letter} has no image under the morphism")]
    MissingImage {
        /// The letter code without an image.
        letter: u32,
    },

    /// The maximum factor length must be at least 1.
    #[error("maximum factor length must be positive")]
    InvalidMaxFactorLength,
}

/// A specialized `Result` type for analysis operations.
pub type Result<T> = std::result::Result<T, DomainError>;
