//! Error types shared by the oracle, the instance model, and the search.

use std::path::PathBuf;

/// Two strings of different lengths were compared.
///
/// Hamming distance is only defined for equal-length strings, so the oracle
/// reports this instead of returning a misleading number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("cannot compare strings of length {left} and {right}")]
pub struct LengthMismatch {
    /// Length of the left operand.
    pub left: usize,
    /// Length of the right operand.
    pub right: usize,
}

/// Errors raised while building or loading an [`Instance`](crate::instance::Instance).
#[derive(Debug, thiserror::Error)]
pub enum InstanceError {
    /// The instance has no strings.
    #[error("instance contains no strings")]
    Empty,

    /// A string does not have the length of the first string.
    #[error("string {index} has length {got}, expected {expected}")]
    RaggedLengths {
        /// Position of the offending string in input order.
        index: usize,
        /// Length of the first string.
        expected: usize,
        /// Length of the offending string.
        got: usize,
    },

    /// An alphabet was empty or listed a symbol twice.
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// A string uses a symbol that the alphabet does not contain.
    #[error("string {index} has symbol {symbol:?} at position {position}, which is not in the alphabet")]
    SymbolOutsideAlphabet {
        /// Position of the offending string in input order.
        index: usize,
        /// Character position inside that string.
        position: usize,
        /// The unexpected symbol.
        symbol: char,
    },

    /// Reading or writing an instance file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors that abort a search.
///
/// Not finding a solution is *not* an error; see [`Solution::NotFound`](crate::search::Solution::NotFound).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The seed candidate does not have the instance's string length.
    #[error("seed candidate is incompatible with the instance: {0}")]
    LengthMismatch(#[from] LengthMismatch),

    /// A witness had fewer than `radius + 1` mismatches although its distance exceeds the radius.
    #[error("witness has {mismatches} mismatches but radius is {radius}; need at least radius + 1")]
    InvariantViolation {
        /// Size of the mismatch set.
        mismatches: usize,
        /// Target radius.
        radius: usize,
    },
}

/// Reasons a candidate fails to be a closest string for an instance.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The candidate has the wrong length.
    #[error("candidate length is wrong: {0}")]
    LengthMismatch(#[from] LengthMismatch),

    /// An input string is farther than the radius from the candidate.
    #[error("string {index} is at distance {distance}, which exceeds radius {radius}")]
    OutsideRadius {
        /// Position of the offending string in input order.
        index: usize,
        /// Its distance to the candidate.
        distance: usize,
        /// Target radius.
        radius: usize,
    },
}

/// Errors raised by the benchmark sweep.
#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    /// The sweep configuration is unusable.
    #[error("invalid sweep configuration: {0}")]
    InvalidConfig(String),

    /// A search aborted.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// The solver returned a string that does not meet the radius.
    #[error("solver returned an invalid solution for d={radius}, k={k}: {source}")]
    InvalidSolution {
        /// Radius of the failing cell.
        radius: usize,
        /// Number of strings in the failing cell.
        k: usize,
        /// What was wrong with the solution.
        #[source]
        source: ValidationError,
    },

    /// Writing the CSV output failed.
    #[error("failed to write sweep output: {0}")]
    Io(#[from] std::io::Error),
}
