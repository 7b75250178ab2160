//! Closest-string instances: an immutable set of equal-length strings plus a radius.

use crate::distance::{hamming_distance, max_pairwise_distance};
use crate::error::{InstanceError, LengthMismatch};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

// ============================================================================
// Instance
// ============================================================================

/// A (d, k, L) closest-string instance.
///
/// Invariants, checked on construction:
/// - there is at least one string (`k >= 1`);
/// - all strings share the same length `L`.
///
/// The instance is read-only once built; the search borrows it for the
/// duration of a single solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    strings: Vec<Vec<u8>>,
    radius: usize,
}

impl Instance {
    /// Builds an instance, validating the invariants.
    ///
    /// # Errors
    /// Returns [`InstanceError::Empty`] for no strings and
    /// [`InstanceError::RaggedLengths`] if the lengths differ.
    pub fn new(strings: Vec<Vec<u8>>, radius: usize) -> Result<Self, InstanceError> {
        let Some(first) = strings.first() else {
            return Err(InstanceError::Empty);
        };
        let expected = first.len();
        if let Some((index, s)) = strings.iter().enumerate().find(|(_, s)| s.len() != expected) {
            return Err(InstanceError::RaggedLengths {
                index,
                expected,
                got: s.len(),
            });
        }
        Ok(Self { strings, radius })
    }

    /// Convenience constructor from string slices.
    ///
    /// # Errors
    /// Same as [`Instance::new`].
    pub fn from_strs<S: AsRef<str>>(strings: &[S], radius: usize) -> Result<Self, InstanceError> {
        Self::new(
            strings.iter().map(|s| s.as_ref().as_bytes().to_vec()).collect(),
            radius,
        )
    }

    /// The input strings, in input order.
    #[inline]
    pub fn strings(&self) -> &[Vec<u8>] {
        &self.strings
    }

    /// The target radius `D`.
    #[inline]
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Number of strings `k`.
    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Always `false`; instances are non-empty by construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Common string length `L`.
    #[inline]
    pub fn string_len(&self) -> usize {
        self.strings[0].len()
    }

    /// Largest Hamming distance between any two input strings.
    pub fn max_pairwise_distance(&self) -> usize {
        let max = max_pairwise_distance(&self.strings);
        debug_assert!(max.is_ok(), "instance strings share one length");
        max.unwrap_or(usize::MAX)
    }

    /// Largest distance from `candidate` to any input string.
    ///
    /// # Errors
    /// Returns [`LengthMismatch`] if `candidate` has the wrong length.
    pub fn max_distance_to(&self, candidate: &[u8]) -> Result<usize, LengthMismatch> {
        let mut max = 0;
        for s in &self.strings {
            max = max.max(hamming_distance(candidate, s)?);
        }
        Ok(max)
    }

    /// Builds an instance without checking lengths.
    #[cfg(test)]
    pub(crate) fn from_raw_for_test(strings: Vec<Vec<u8>>, radius: usize) -> Self {
        Self { strings, radius }
    }

    // ------------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------------

    /// Writes one string per line.
    ///
    /// # Errors
    /// Propagates I/O errors from the writer.
    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        for s in &self.strings {
            w.write_all(s)?;
            w.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Saves the strings to `path` in the text format read by [`parse_instance`].
    ///
    /// # Errors
    /// Returns [`InstanceError::Io`] if the file cannot be written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), InstanceError> {
        let path = path.as_ref();
        let file = fs::File::create(path).map_err(|source| InstanceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut w = io::BufWriter::new(file);
        self.write_to(&mut w)
            .and_then(|()| w.flush())
            .map_err(|source| InstanceError::Io {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Loads an instance from a text file.
    ///
    /// # Errors
    /// Returns [`InstanceError::Io`] if the file cannot be read, or a
    /// validation error from [`parse_instance`].
    pub fn load_from_file(path: impl AsRef<Path>, radius: usize) -> Result<Self, InstanceError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| InstanceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse_instance(&text, radius)
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.strings {
            writeln!(f, "{}", String::from_utf8_lossy(s))?;
        }
        Ok(())
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses an instance from text.
///
/// Rules:
/// - Each non-empty line is one string; surrounding whitespace is trimmed.
/// - Lines starting with `#` are comments.
/// - All strings must have the same length.
///
/// # Errors
/// Returns [`InstanceError::Empty`] if no strings are found, or
/// [`InstanceError::RaggedLengths`] if the lengths differ.
pub fn parse_instance(text: &str, radius: usize) -> Result<Instance, InstanceError> {
    let strings = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(|l| l.as_bytes().to_vec())
        .collect();
    Instance::new(strings, radius)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_instance() {
        assert!(matches!(Instance::new(vec![], 1), Err(InstanceError::Empty)));
    }

    #[test]
    fn rejects_ragged_lengths() {
        let err = Instance::from_strs(&["acgt", "acg", "acgt"], 1).unwrap_err();
        match err {
            InstanceError::RaggedLengths {
                index,
                expected,
                got,
            } => assert_eq!((index, expected, got), (1, 4, 3)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn accessors_report_shape() {
        let inst = Instance::from_strs(&["aaaa", "aaab", "aaba"], 1).unwrap();
        assert_eq!(inst.len(), 3);
        assert!(!inst.is_empty());
        assert_eq!(inst.string_len(), 4);
        assert_eq!(inst.radius(), 1);
        assert_eq!(inst.max_pairwise_distance(), 2);
        assert_eq!(inst.max_distance_to(b"aaaa"), Ok(1));
        assert!(inst.max_distance_to(b"aaa").is_err());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "share one length")]
    fn ragged_strings_trip_the_pairwise_distance_assertion() {
        let inst = Instance::from_raw_for_test(vec![b"acgt".to_vec(), b"acg".to_vec()], 1);
        let _ = inst.max_pairwise_distance();
    }

    #[test]
    fn parse_skips_blank_lines_and_comments() {
        let text = "# three strings\n\n  aaaa \naaab\n# trailing comment\naaba\n\n";
        let inst = parse_instance(text, 2).unwrap();
        assert_eq!(inst.strings(), &[b"aaaa".to_vec(), b"aaab".to_vec(), b"aaba".to_vec()]);
        assert_eq!(inst.radius(), 2);
    }

    #[test]
    fn parse_rejects_whitespace_only() {
        assert!(matches!(parse_instance("  \n\n# nothing\n", 0), Err(InstanceError::Empty)));
    }

    #[test]
    fn write_and_parse_roundtrip() {
        let inst = Instance::from_strs(&["acgtac", "ttgaca"], 2).unwrap();
        let mut buf = Vec::new();
        inst.write_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, inst.to_string());
        assert_eq!(parse_instance(&text, 2).unwrap(), inst);
    }

    #[test]
    fn save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("instance.txt");
        let inst = Instance::from_strs(&["gattaca", "gattacc", "cattaca"], 1).unwrap();
        inst.save_to_file(&path).unwrap();
        let loaded = Instance::load_from_file(&path, 1).unwrap();
        assert_eq!(loaded, inst);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Instance::load_from_file(dir.path().join("missing.txt"), 0).unwrap_err();
        assert!(matches!(err, InstanceError::Io { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }
}
