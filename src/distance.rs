//! Hamming distance oracle.
//!
//! Every call site in the search only compares distances against a bound, so
//! alongside the exact count there is a bounded variant that stops scanning
//! as soon as the bound is exceeded.

use crate::error::LengthMismatch;

// ============================================================================
// Public API
// ============================================================================

/// Returns the number of positions at which `a` and `b` differ.
///
/// # Errors
/// Returns [`LengthMismatch`] if the strings have different lengths.
#[inline]
pub fn hamming_distance(a: &[u8], b: &[u8]) -> Result<usize, LengthMismatch> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).filter(|(x, y)| x != y).count())
}

/// Returns `Some(distance)` if the distance is at most `bound`, and `None` as
/// soon as more than `bound` mismatches have been seen.
///
/// # Errors
/// Returns [`LengthMismatch`] if the strings have different lengths.
#[inline]
pub fn hamming_distance_within(
    a: &[u8],
    b: &[u8],
    bound: usize,
) -> Result<Option<usize>, LengthMismatch> {
    check_lengths(a, b)?;
    let mut count = 0usize;
    for (x, y) in a.iter().zip(b) {
        if x != y {
            count += 1;
            if count > bound {
                return Ok(None);
            }
        }
    }
    Ok(Some(count))
}

/// Returns the positions where `a` and `b` differ, in ascending order.
///
/// The length of the result equals `hamming_distance(a, b)`.
///
/// # Errors
/// Returns [`LengthMismatch`] if the strings have different lengths.
pub fn mismatch_positions(a: &[u8], b: &[u8]) -> Result<Vec<usize>, LengthMismatch> {
    check_lengths(a, b)?;
    Ok(a.iter()
        .zip(b)
        .enumerate()
        .filter_map(|(i, (x, y))| (x != y).then_some(i))
        .collect())
}

/// Returns the largest pairwise distance in `strings` (0 for fewer than two).
///
/// # Errors
/// Returns [`LengthMismatch`] if two strings have different lengths.
pub fn max_pairwise_distance<S: AsRef<[u8]>>(strings: &[S]) -> Result<usize, LengthMismatch> {
    let mut max = 0;
    for (i, a) in strings.iter().enumerate() {
        for b in &strings[i + 1..] {
            max = max.max(hamming_distance(a.as_ref(), b.as_ref())?);
        }
    }
    Ok(max)
}

// ============================================================================
// Internal
// ============================================================================

#[inline(always)]
fn check_lengths(a: &[u8], b: &[u8]) -> Result<(), LengthMismatch> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(LengthMismatch {
            left: a.len(),
            right: b.len(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
