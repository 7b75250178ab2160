//! Finite symbol sets for generated instances.
//!
//! The search itself never looks at symbols beyond equality, so the alphabet
//! only matters when instances are generated or checked.

use crate::error::InstanceError;
use rand::Rng;

/// A non-empty set of distinct byte symbols, in a fixed order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<u8>,
}

impl Alphabet {
    /// Creates an alphabet from a list of symbols.
    ///
    /// # Errors
    /// Returns [`InstanceError::InvalidAlphabet`] if `symbols` is empty or has duplicates.
    pub fn new(symbols: impl Into<Vec<u8>>) -> Result<Self, InstanceError> {
        let symbols = symbols.into();
        if symbols.is_empty() {
            return Err(InstanceError::InvalidAlphabet("no symbols".into()));
        }
        for (i, s) in symbols.iter().enumerate() {
            if symbols[..i].contains(s) {
                return Err(InstanceError::InvalidAlphabet(format!(
                    "symbol {:?} listed twice",
                    *s as char
                )));
            }
        }
        Ok(Self { symbols })
    }

    /// The four nucleotides `a`, `c`, `t`, `g`.
    pub fn dna() -> Self {
        Self {
            symbols: b"actg".to_vec(),
        }
    }

    /// Number of symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; alphabets are non-empty by construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the `i`-th symbol.
    #[inline]
    pub fn symbol(&self, i: usize) -> u8 {
        self.symbols[i]
    }

    /// Returns all symbols in order.
    #[inline]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Returns whether `symbol` belongs to the alphabet.
    #[inline]
    pub fn contains(&self, symbol: u8) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Draws a symbol uniformly at random.
    #[inline]
    pub fn random_symbol<R: Rng>(&self, rng: &mut R) -> u8 {
        self.symbols[rng.random_range(0..self.symbols.len())]
    }

    /// Draws a uniformly random string of `len` symbols.
    pub fn random_string<R: Rng>(&self, rng: &mut R, len: usize) -> Vec<u8> {
        (0..len).map(|_| self.random_symbol(rng)).collect()
    }

    /// Checks that every symbol of every string belongs to the alphabet.
    ///
    /// # Errors
    /// Returns [`InstanceError::SymbolOutsideAlphabet`] for the first offending symbol.
    pub fn check_strings<S: AsRef<[u8]>>(&self, strings: &[S]) -> Result<(), InstanceError> {
        for (index, s) in strings.iter().enumerate() {
            if let Some(position) = s.as_ref().iter().position(|&b| !self.contains(b)) {
                return Err(InstanceError::SymbolOutsideAlphabet {
                    index,
                    position,
                    symbol: s.as_ref()[position] as char,
                });
            }
        }
        Ok(())
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::dna()
    }
}

impl std::str::FromStr for Alphabet {
    type Err = InstanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim().as_bytes())
    }
}
