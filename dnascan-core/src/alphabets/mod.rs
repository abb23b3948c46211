//! Symbol sets used to validate sequence bytes.

pub mod dna;

use bit_set::BitSet;

/// A set of accepted byte symbols, matched in either case.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Alphabet {
    symbols: BitSet,
}

impl Alphabet {
    pub fn case_insensitive(symbols: &[u8]) -> Self {
        Alphabet {
            symbols: symbols
                .iter()
                .flat_map(|b| [b.to_ascii_uppercase(), b.to_ascii_lowercase()])
                .map(usize::from)
                .collect(),
        }
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.symbols.contains(symbol as usize)
    }

    /// Position and value of the first byte of `text` outside the alphabet.
    pub fn first_invalid(&self, text: &[u8]) -> Option<(usize, u8)> {
        text.iter()
            .position(|&b| !self.contains(b))
            .map(|pos| (pos, text[pos]))
    }
}
