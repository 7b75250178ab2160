//! # Closest String Solver
//!
//! A fixed-parameter-tractable solver for the (d, k, L)-Closest String
//! Problem: given `k` strings of length `L` and a radius `D`, find a string
//! within Hamming distance `D` of all of them, or report that none exists.
//!
//! This crate provides:
//! - A Hamming distance oracle that refuses to compare strings of different lengths.
//! - A seed selector that starts the search from the most central input string.
//! - A bounded search tree whose size is at most \((D+1)^{D+1}\), independent of `k` and `L`.
//! - Seedable instance generators and a benchmark sweep that writes CSV timings.
//!
//! ## Quick Start
//!
//! ```
//! use closest_string::instance::Instance;
//! use closest_string::search::{solve, Solution};
//! use closest_string::seed::pick_seed;
//!
//! let instance = Instance::from_strs(&["aaaa", "aaab", "aaba"], 1).unwrap();
//! let seed = pick_seed(&instance);
//! match solve(&instance, &seed, 1).unwrap() {
//!     Solution::Found(s) => assert!(instance.max_distance_to(&s).unwrap() <= 1),
//!     Solution::NotFound => unreachable!("a centre exists"),
//! }
//! ```
//!
//! ## Generating Instances
//!
//! ```
//! use closest_string::alphabet::Alphabet;
//! use closest_string::generate::generate_planted;
//! use closest_string::search::solve_instance;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let instance = generate_planted(&mut rng, &Alphabet::dna(), 10, 50, 5);
//! assert!(solve_instance(&instance).unwrap().is_found());
//! ```
//!
//! ## Modules
//!
//! - [`distance`]: Hamming distance, bounded distance, mismatch positions.
//! - [`instance`]: Validated instances and their text format.
//! - [`seed`]: Seed selection.
//! - [`search`]: The bounded search tree, optionally parallel over sibling branches.
//! - [`validate`]: Independent solution checks.
//! - [`alphabet`], [`generate`]: Random instance generation.
//! - [`sweep`]: Timing sweep over radii and instance sizes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::inline_always)] // Intentional for hot-path code
#![allow(clippy::doc_markdown)] // LaTeX-style notation in docs
#![allow(clippy::multiple_crate_versions)] // Cargo.lock management is external

pub mod alphabet;
pub mod distance;
pub mod error;
pub mod generate;
pub mod instance;
pub mod search;
pub mod seed;
pub mod sweep;
pub mod validate;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::alphabet::Alphabet;
    pub use crate::distance::hamming_distance;
    pub use crate::error::{InstanceError, LengthMismatch, SearchError, ValidationError};
    pub use crate::instance::{parse_instance, Instance};
    pub use crate::search::{solve, solve_instance, Solution, Solver, SolverConfig};
    pub use crate::seed::pick_seed;
    pub use crate::validate::validate_solution;
}
