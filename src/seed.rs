//! Seed selection: a starting candidate for the bounded search.
//!
//! The seed only affects how much of the tree gets explored. Any input string
//! is a correct seed for a search with budget `D`, since a solution is within
//! `D` of every input.

use crate::distance::hamming_distance;
use crate::instance::Instance;

/// Returns the input string whose total distance to all other inputs is
/// smallest. Ties go to the earliest string in input order.
pub fn pick_seed(instance: &Instance) -> Vec<u8> {
    instance.strings()[pick_seed_index(instance)].clone()
}

/// Index of the string returned by [`pick_seed`].
pub fn pick_seed_index(instance: &Instance) -> usize {
    let strings = instance.strings();
    let mut best_index = 0;
    let mut best_total = usize::MAX;

    for (i, a) in strings.iter().enumerate() {
        let mut total = 0usize;
        for (j, b) in strings.iter().enumerate() {
            if i == j {
                continue;
            }
            total = total.saturating_add(pair_distance(a, b));
            if total >= best_total {
                break;
            }
        }
        if total < best_total {
            best_total = total;
            best_index = i;
        }
    }

    best_index
}

/// Distance between two strings of one instance. A length mismatch breaks the
/// instance invariant; release builds treat the pair as maximally far apart.
#[inline]
fn pair_distance(a: &[u8], b: &[u8]) -> usize {
    let distance = hamming_distance(a, b);
    debug_assert!(distance.is_ok(), "instance strings share one length");
    distance.unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_string_is_its_own_seed() {
        let inst = Instance::from_strs(&["gattaca"], 0).unwrap();
        assert_eq!(pick_seed(&inst), b"gattaca".to_vec());
    }

    #[test]
    fn picks_the_median_like_string() {
        // Totals: aaaa -> 2, aaab -> 3, aaba -> 3.
        let inst = Instance::from_strs(&["aaab", "aaaa", "aaba"], 1).unwrap();
        assert_eq!(pick_seed_index(&inst), 1);
        assert_eq!(pick_seed(&inst), b"aaaa".to_vec());
    }

    #[test]
    fn ties_go_to_first_in_input_order() {
        // Both strings have total distance 4.
        let inst = Instance::from_strs(&["tttt", "aaaa"], 0).unwrap();
        assert_eq!(pick_seed(&inst), b"tttt".to_vec());

        // All three are pairwise at distance 1.
        let inst = Instance::from_strs(&["ca", "aa", "ba"], 0).unwrap();
        assert_eq!(pick_seed_index(&inst), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "share one length")]
    fn ragged_strings_trip_the_length_assertion() {
        let inst = Instance::from_raw_for_test(vec![b"acgt".to_vec(), b"acg".to_vec()], 1);
        let _ = pick_seed_index(&inst);
    }

    #[test]
    fn duplicates_do_not_confuse_the_selection() {
        let inst = Instance::from_strs(&["acgt", "tgca", "acgt", "acgt"], 2).unwrap();
        assert_eq!(pick_seed(&inst), b"acgt".to_vec());
    }
}
