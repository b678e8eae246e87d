use crate::bispecial::BispecialDetector;
use crate::error::{DomainError, Result};
use crate::extension_graph::ExtensionGraph;
use crate::letter::Alphabet;
use crate::morphism::Morphism;
use crate::reducibility::filter_irreducible;
use crate::word::Word;

/// Which factor listing a run should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// Every distinct factor up to the maximum length.
    AllFactors,
    /// Only the bispecial factors among them.
    AllBispecialFactors,
}

/// Plain-data description of one analysis run.
///
/// The driver fills this in once; letter codes are raw integers and are
/// validated by [`Analysis::new`]. There is no interactive or global state
/// behind a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Number of letters; the alphabet is `{0, .., alphabet_size - 1}`.
    pub alphabet_size: u32,
    /// The reference word, as letter codes.
    pub reference_word: Vec<u32>,
    /// Image of each letter under the morphism, in code order.
    pub morphism_table: Vec<Vec<u32>>,
    /// How many times the morphism is applied to the reference word.
    pub morphism_power: u32,
    /// Upper bound on enumerated factor length, clamped to the expanded
    /// word's length.
    pub max_factor_length: usize,
}

/// One validated run: the alphabet, the morphism and the working word
/// `phi^k(reference)`.
///
/// Everything is read-only after construction; each query method is a pure
/// function of this state, so independent queries may run in any order.
#[derive(Debug, Clone)]
pub struct Analysis {
    alphabet: Alphabet,
    morphism: Morphism,
    word: Word,
    max_factor_length: usize,
}

impl Analysis {
    /// Validates the configuration and derives the working word.
    ///
    /// Validation fails fast, before any enumeration: a zero alphabet
    /// size, an out-of-range letter in the reference word or a morphism
    /// image, a morphism table whose entry count is not the alphabet size,
    /// and a zero maximum factor length are all rejected with the matching
    /// [`DomainError`].
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        let alphabet = Alphabet::new(config.alphabet_size)?;

        let reference = Word::from_codes(&config.reference_word);
        alphabet.require_word(&reference)?;

        let images: Vec<Word> = config
            .morphism_table
            .iter()
            .map(|codes| Word::from_codes(codes))
            .collect();
        let morphism = Morphism::new(images, &alphabet)?;

        if config.max_factor_length == 0 {
            return Err(DomainError::InvalidMaxFactorLength);
        }

        let word = morphism.apply_power(&reference, config.morphism_power)?;
        let max_factor_length = config.max_factor_length.min(word.len());

        Ok(Self {
            alphabet,
            morphism,
            word,
            max_factor_length,
        })
    }

    /// Returns the working word `phi^k(reference)`.
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Returns the alphabet of the run.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the validated morphism of the run.
    pub fn morphism(&self) -> &Morphism {
        &self.morphism
    }

    /// Returns the factor-length bound after clamping.
    pub fn max_factor_length(&self) -> usize {
        self.max_factor_length
    }

    /// Enumerates the distinct factors of the working word, ascending by
    /// length, then by first occurrence.
    pub fn factors(&self) -> Vec<Word> {
        self.word.factors_up_to(self.max_factor_length)
    }

    /// Filters the factor listing down to the bispecial ones.
    pub fn bispecial_factors(&self) -> Vec<Word> {
        let detector = BispecialDetector::new(&self.word, &self.alphabet);
        detector.all_bispecial(&self.factors())
    }

    /// Removes bispecial factors that are morphism images of strictly
    /// shorter ones.
    ///
    /// Factors are ordered by length with lexicographic ties before the
    /// filter runs, which is the order the result comes back in.
    pub fn irreducible_factors(&self) -> Result<Vec<Word>> {
        let mut bispecial = self.bispecial_factors();
        bispecial.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        filter_irreducible(&bispecial, &self.morphism)
    }

    /// Builds the extension graph of one factor of the working word.
    pub fn extension_graph(&self, factor: &Word) -> ExtensionGraph {
        ExtensionGraph::build(&self.word, &self.alphabet, factor)
    }

    /// Runs the factor listing selected by `mode`.
    pub fn query(&self, mode: QueryMode) -> Vec<Word> {
        match mode {
            QueryMode::AllFactors => self.factors(),
            QueryMode::AllBispecialFactors => self.bispecial_factors(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letter::Letter;

    /// Fibonacci run: 0 -> 01, 1 -> 0, expanded four times from "0".
    fn fibonacci_config() -> AnalysisConfig {
        AnalysisConfig {
            alphabet_size: 2,
            reference_word: vec![0],
            morphism_table: vec![vec![0, 1], vec![0]],
            morphism_power: 4,
            max_factor_length: 8,
        }
    }

    #[test]
    fn test_working_word_is_expanded() {
        let analysis = Analysis::new(&fibonacci_config()).unwrap();
        assert_eq!(
            analysis.word(),
            &Word::from_codes(&[0, 1, 0, 0, 1, 0, 1, 0])
        );
        assert_eq!(analysis.max_factor_length(), 8);
    }

    #[test]
    fn test_max_factor_length_clamped() {
        let config = AnalysisConfig {
            max_factor_length: 100,
            ..fibonacci_config()
        };
        let analysis = Analysis::new(&config).unwrap();
        assert_eq!(analysis.max_factor_length(), 8);

        let factors = analysis.factors();
        assert_eq!(
            factors.iter().filter(|f| f.len() == 8).count(),
            1
        );
        assert_eq!(factors.last(), Some(analysis.word()));
    }

    #[test]
    fn test_query_modes() {
        let analysis = Analysis::new(&fibonacci_config()).unwrap();

        assert_eq!(analysis.query(QueryMode::AllFactors), analysis.factors());
        assert_eq!(
            analysis.query(QueryMode::AllBispecialFactors),
            analysis.bispecial_factors()
        );
    }

    #[test]
    fn test_bispecial_factors_of_fibonacci_prefix() {
        let analysis = Analysis::new(&fibonacci_config()).unwrap();
        // Only the single letter 0 is bispecial at this length; the empty
        // word is bispecial too but is not part of the enumeration.
        assert_eq!(analysis.bispecial_factors(), vec![Word::from_codes(&[0])]);

        let detector = BispecialDetector::new(analysis.word(), analysis.alphabet());
        assert!(detector.is_bispecial(&Word::empty()));
    }

    #[test]
    fn test_irreducible_factors_under_identity() {
        let config = AnalysisConfig {
            alphabet_size: 2,
            reference_word: vec![0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1],
            morphism_table: vec![vec![0], vec![1]],
            morphism_power: 1,
            max_factor_length: 13,
        };
        let analysis = Analysis::new(&config).unwrap();

        let mut bispecial = analysis.bispecial_factors();
        bispecial.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        assert_eq!(analysis.irreducible_factors().unwrap(), bispecial);
    }

    #[test]
    fn test_extension_graph_query() {
        let analysis = Analysis::new(&fibonacci_config()).unwrap();
        let graph = analysis.extension_graph(&Word::from_codes(&[0]));

        assert!(graph.has_edge(Letter::new(0), Letter::new(1)));
        assert!(!graph.has_edge(Letter::new(0), Letter::new(0)));
    }

    #[test]
    fn test_invalid_alphabet_rejected() {
        let config = AnalysisConfig {
            alphabet_size: 0,
            ..fibonacci_config()
        };
        assert_eq!(
            Analysis::new(&config).unwrap_err(),
            DomainError::InvalidAlphabet
        );
    }

    #[test]
    fn test_reference_word_letter_out_of_range() {
        let config = AnalysisConfig {
            reference_word: vec![0, 2],
            ..fibonacci_config()
        };
        assert_eq!(
            Analysis::new(&config).unwrap_err(),
            DomainError::InvalidLetter {
                letter: 2,
                alphabet_size: 2
            }
        );
    }

    #[test]
    fn test_morphism_arity_checked() {
        let config = AnalysisConfig {
            morphism_table: vec![vec![0, 1]],
            ..fibonacci_config()
        };
        assert_eq!(
            Analysis::new(&config).unwrap_err(),
            DomainError::MorphismArity {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_zero_max_factor_length_rejected() {
        let config = AnalysisConfig {
            max_factor_length: 0,
            ..fibonacci_config()
        };
        assert_eq!(
            Analysis::new(&config).unwrap_err(),
            DomainError::InvalidMaxFactorLength
        );
    }

    #[test]
    fn test_power_zero_keeps_reference() {
        let config = AnalysisConfig {
            morphism_power: 0,
            ..fibonacci_config()
        };
        let analysis = Analysis::new(&config).unwrap();
        assert_eq!(analysis.word(), &Word::from_codes(&[0]));
        assert_eq!(analysis.max_factor_length(), 1);
    }
}
