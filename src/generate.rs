//! Random instance generation for tests and benchmarks.
//!
//! Generators take any `R: Rng`, so a seeded RNG reproduces the same
//! instances.

use crate::alphabet::Alphabet;
use crate::instance::Instance;
use rand::Rng;
use rand::seq::index;

// ============================================================================
// Strategies
// ============================================================================

/// How the strings of a generated instance are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationStrategy {
    /// Every string is a mutated copy of a hidden centre, so a solution
    /// within the radius always exists.
    Planted,
    /// Independent uniform strings; a solution may or may not exist.
    Uniform,
}

/// Generates an instance of `k` strings of length `length` with the given strategy.
///
/// # Panics
/// Panics if `k` is zero.
pub fn generate<R: Rng>(
    rng: &mut R,
    strategy: GenerationStrategy,
    alphabet: &Alphabet,
    k: usize,
    length: usize,
    radius: usize,
) -> Instance {
    match strategy {
        GenerationStrategy::Planted => generate_planted(rng, alphabet, k, length, radius),
        GenerationStrategy::Uniform => generate_uniform(rng, alphabet, k, length, radius),
    }
}

// ============================================================================
// Generators
// ============================================================================

/// Generates a planted instance together with its hidden centre.
///
/// Each string starts as a copy of a uniform random centre. Then `radius`
/// distinct positions (all of them if `radius >= length`) are overwritten
/// with uniform random symbols. A replacement may equal the original symbol,
/// so every string is *at most* `radius` from the centre.
///
/// # Panics
/// Panics if `k` is zero.
pub fn generate_planted_with_centre<R: Rng>(
    rng: &mut R,
    alphabet: &Alphabet,
    k: usize,
    length: usize,
    radius: usize,
) -> (Instance, Vec<u8>) {
    assert!(k > 0, "an instance needs at least one string");
    let centre = alphabet.random_string(rng, length);
    let mutations = radius.min(length);

    let strings = (0..k)
        .map(|_| {
            let mut s = centre.clone();
            for p in index::sample(rng, length, mutations) {
                s[p] = alphabet.random_symbol(rng);
            }
            s
        })
        .collect();

    let instance = Instance::new(strings, radius).unwrap_or_else(|e| unreachable!("{e}"));
    (instance, centre)
}

/// Generates a planted instance; see [`generate_planted_with_centre`].
///
/// # Panics
/// Panics if `k` is zero.
pub fn generate_planted<R: Rng>(
    rng: &mut R,
    alphabet: &Alphabet,
    k: usize,
    length: usize,
    radius: usize,
) -> Instance {
    generate_planted_with_centre(rng, alphabet, k, length, radius).0
}

/// Generates `k` independent uniform strings.
///
/// # Panics
/// Panics if `k` is zero.
pub fn generate_uniform<R: Rng>(
    rng: &mut R,
    alphabet: &Alphabet,
    k: usize,
    length: usize,
    radius: usize,
) -> Instance {
    assert!(k > 0, "an instance needs at least one string");
    let strings = (0..k).map(|_| alphabet.random_string(rng, length)).collect();
    Instance::new(strings, radius).unwrap_or_else(|e| unreachable!("{e}"))
}

// ============================================================================
// Tests
// ============================================================================
