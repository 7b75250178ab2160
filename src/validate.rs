//! Deterministic validation of candidate closest strings.

use crate::distance::hamming_distance;
use crate::error::ValidationError;
use crate::instance::Instance;

// ============================================================================
// Public API
// ============================================================================

/// Checks that `candidate` is within `radius` of every input string.
///
/// # Errors
/// Returns the first input (in input order) that is too far away, or a
/// length mismatch if `candidate` has the wrong length.
pub fn validate_solution(
    instance: &Instance,
    candidate: &[u8],
    radius: usize,
) -> Result<(), ValidationError> {
    for (index, s) in instance.strings().iter().enumerate() {
        let distance = hamming_distance(candidate, s)?;
        if distance > radius {
            return Err(ValidationError::OutsideRadius {
                index,
                distance,
                radius,
            });
        }
    }
    Ok(())
}

/// Checks a candidate against the instance's own radius. The CLI runs this
/// on every solution before printing it.
///
/// # Errors
/// See [`validate_solution`].
pub fn validate_for_instance(instance: &Instance, candidate: &[u8]) -> Result<(), ValidationError> {
    validate_solution(instance, candidate, instance.radius())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn inst(strings: &[&str], radius: usize) -> Instance {
        Instance::from_strs(strings, radius).unwrap()
    }

    #[test]
    fn accepts_valid_centre() {
        let instance = inst(&["aaaa", "aaab", "aaba"], 1);
        assert!(validate_solution(&instance, b"aaaa", 1).is_ok());
        assert!(validate_for_instance(&instance, b"aaaa").is_ok());
    }

    #[test]
    fn rejects_first_string_outside_radius() {
        let instance = inst(&["aaaa", "aabb", "bbbb"], 1);
        assert_eq!(
            validate_solution(&instance, b"aaaa", 1),
            Err(ValidationError::OutsideRadius {
                index: 1,
                distance: 2,
                radius: 1
            })
        );
    }

    #[test]
    fn rejects_wrong_length() {
        let instance = inst(&["aaaa"], 4);
        let result = validate_solution(&instance, b"aaa", 4);
        assert!(matches!(result, Err(ValidationError::LengthMismatch(_))));
        assert!(result.unwrap_err().to_string().contains("length"));
    }

    #[test]
    fn radius_zero_requires_identical_strings() {
        let instance = inst(&["acgt", "acgt"], 0);
        assert!(validate_solution(&instance, b"acgt", 0).is_ok());
        assert!(validate_solution(&instance, b"acga", 0).is_err());
    }
}
