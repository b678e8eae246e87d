use crate::letter::{Alphabet, Letter};
use crate::word::Word;
use std::fmt;

/// The extension graph of one bispecial factor `u`: an undirected graph on
/// the alphabet with an edge `{a, b}` whenever `a u b` occurs in the
/// reference word.
///
/// The adjacency matrix is symmetric by construction; both directions of a
/// pair are marked on every hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionGraph {
    size: usize,
    adjacency: Vec<bool>,
}

impl ExtensionGraph {
    /// Builds the graph by probing `a factor b` for every ordered letter
    /// pair of the alphabet.
    pub fn build(word: &Word, alphabet: &Alphabet, factor: &Word) -> Self {
        let size = alphabet.size();
        let mut adjacency = vec![false; size * size];

        for a in alphabet.letters() {
            for b in alphabet.letters() {
                let probe = Word::concat(&[
                    Word::from_letter(a),
                    factor.clone(),
                    Word::from_letter(b),
                ]);

                if !word.occurrences(&probe).is_empty() {
                    adjacency[a.index() * size + b.index()] = true;
                    adjacency[b.index() * size + a.index()] = true;
                }
            }
        }

        Self { size, adjacency }
    }

    /// Returns the number of vertices, the alphabet size.
    pub fn alphabet_size(&self) -> usize {
        self.size
    }

    /// Returns true when the edge `{a, b}` is present.
    pub fn has_edge(&self, a: Letter, b: Letter) -> bool {
        a.index() < self.size
            && b.index() < self.size
            && self.adjacency[a.index() * self.size + b.index()]
    }

    /// Renders the enabled pairs one per line, in ascending row-major
    /// order over the letter codes:
    ///
    /// ```text
    /// {
    ///     0 1
    ///     1 0
    /// }
    /// ```
    pub fn list_view(&self) -> String {
        let mut out = String::from("{\n");
        for from in 0..self.size {
            for to in 0..self.size {
                if self.adjacency[from * self.size + to] {
                    out.push_str(&format!("    {from} {to}\n"));
                }
            }
        }
        out.push('}');
        out
    }
}

impl fmt::Display for ExtensionGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.list_view())
    }
}
