//! Bounded search tree for the closest-string decision problem.
//!
//! Starting from a seed candidate with an edit budget `d`, each node either
//! finds that every input string is within the radius `D`, prunes because
//! some input is farther than `D + d`, or picks a *witness* input that is
//! farther than `D` and branches on the first `D + 1` positions where the
//! candidate disagrees with it. A solution within budget must agree with the
//! witness on at least one of those positions, so one of the branches moves
//! strictly closer to it. Depth and fan-out are both bounded by `D + 1`,
//! giving at most `(D + 1)^(D + 1)` nodes regardless of `k` and `L`.

use crate::distance::{hamming_distance, hamming_distance_within, mismatch_positions};
use crate::error::SearchError;
use crate::instance::Instance;
use crate::seed::pick_seed;
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use tracing::{debug, trace};

// ============================================================================
// Results and configuration
// ============================================================================

/// Outcome of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solution {
    /// A string within the radius of every input string.
    Found(Vec<u8>),
    /// No such string is reachable within the budget.
    NotFound,
}

impl Solution {
    /// Returns whether a solution was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Solution::Found(_))
    }

    /// Returns the solution string, if any.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Solution::Found(s) => Some(s),
            Solution::NotFound => None,
        }
    }

    /// Consumes the result, returning the solution string, if any.
    pub fn into_option(self) -> Option<Vec<u8>> {
        match self {
            Solution::Found(s) => Some(s),
            Solution::NotFound => None,
        }
    }
}

/// Search configuration parameters.
#[derive(Clone, Debug)]
pub struct SolverConfig {
    /// Explore sibling branches on the rayon pool.
    pub parallel: bool,
    /// Nodes at this depth or deeper run their children sequentially.
    /// Only used when `parallel` is set.
    pub parallel_depth: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            parallel_depth: 2,
        }
    }
}

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search-tree nodes visited, including the root.
    pub nodes: u64,
    /// Nodes cut off because an input string was out of reach.
    pub pruned: u64,
    /// Deepest level reached (root is 0).
    pub max_depth: usize,
}

// ============================================================================
// Public API
// ============================================================================

/// Searches for a string within `radius` of every input string, starting
/// from `seed` with an edit budget of `radius`.
///
/// # Errors
/// Returns [`SearchError::LengthMismatch`] if `seed` has the wrong length.
pub fn solve(instance: &Instance, seed: &[u8], radius: usize) -> Result<Solution, SearchError> {
    Solver::new(instance, radius, SolverConfig::default()).run(seed)
}

/// Seeds with [`pick_seed`] and solves for the instance's own radius.
///
/// # Errors
/// Never fails for a well-formed instance; see [`solve`].
pub fn solve_instance(instance: &Instance) -> Result<Solution, SearchError> {
    let seed = pick_seed(instance);
    solve(instance, &seed, instance.radius())
}

/// One bounded search over a borrowed instance.
///
/// Statistics accumulate across calls to [`Solver::run`].
#[derive(Debug)]
pub struct Solver<'a> {
    instance: &'a Instance,
    radius: usize,
    cfg: SolverConfig,
    nodes: AtomicU64,
    pruned: AtomicU64,
    max_depth: AtomicUsize,
}

/// What the scan over the inputs decided for one node.
enum Scan {
    /// Some input is farther than `radius + budget`.
    Prune,
    /// Every input is within `radius`.
    Solved,
    /// Index of an input farther than `radius`.
    Witness(usize),
}

impl<'a> Solver<'a> {
    /// Creates a solver for `instance` with the given target radius.
    pub fn new(instance: &'a Instance, radius: usize, cfg: SolverConfig) -> Self {
        Self {
            instance,
            radius,
            cfg,
            nodes: AtomicU64::new(0),
            pruned: AtomicU64::new(0),
            max_depth: AtomicUsize::new(0),
        }
    }

    /// Runs the search from `seed` with budget equal to the radius.
    ///
    /// # Errors
    /// Returns [`SearchError::LengthMismatch`] if `seed` has the wrong length.
    pub fn run(&self, seed: &[u8]) -> Result<Solution, SearchError> {
        hamming_distance(seed, &self.instance.strings()[0])?;
        debug!(
            k = self.instance.len(),
            len = seed.len(),
            radius = self.radius,
            parallel = self.cfg.parallel,
            "starting bounded search"
        );
        let solution = self.search(seed, self.radius, 0)?;
        let stats = self.stats();
        debug!(
            found = solution.is_found(),
            nodes = stats.nodes,
            pruned = stats.pruned,
            max_depth = stats.max_depth,
            "bounded search finished"
        );
        Ok(solution)
    }

    /// Returns the counters collected so far.
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            nodes: self.nodes.load(Ordering::Relaxed),
            pruned: self.pruned.load(Ordering::Relaxed),
            max_depth: self.max_depth.load(Ordering::Relaxed),
        }
    }

    fn search(&self, candidate: &[u8], budget: usize, depth: usize) -> Result<Solution, SearchError> {
        self.nodes.fetch_add(1, Ordering::Relaxed);
        self.max_depth.fetch_max(depth, Ordering::Relaxed);

        let witness = match self.scan(candidate, budget)? {
            Scan::Prune => {
                self.pruned.fetch_add(1, Ordering::Relaxed);
                trace!(depth, budget, "pruned");
                return Ok(Solution::NotFound);
            }
            Scan::Solved => return Ok(Solution::Found(candidate.to_vec())),
            Scan::Witness(w) => &self.instance.strings()[w],
        };

        // Out of edits. The scan already prunes this case, since a witness at
        // budget zero is farther than `radius + 0`.
        let Some(next_budget) = budget.checked_sub(1) else {
            return Ok(Solution::NotFound);
        };

        let positions = self.branch_positions(candidate, witness)?;

        if self.cfg.parallel && depth < self.cfg.parallel_depth {
            let found = positions.par_iter().find_map_any(|&p| {
                let child = substitute(candidate, p, witness[p]);
                match self.search(&child, next_budget, depth + 1) {
                    Ok(Solution::Found(s)) => Some(Ok(s)),
                    Ok(Solution::NotFound) => None,
                    Err(e) => Some(Err(e)),
                }
            });
            return match found {
                Some(Ok(s)) => Ok(Solution::Found(s)),
                Some(Err(e)) => Err(e),
                None => Ok(Solution::NotFound),
            };
        }

        for p in positions {
            let child = substitute(candidate, p, witness[p]);
            if let Solution::Found(s) = self.search(&child, next_budget, depth + 1)? {
                return Ok(Solution::Found(s));
            }
        }
        Ok(Solution::NotFound)
    }

    /// Checks every input against `candidate`.
    ///
    /// The witness is the first input (in input order) farther than the
    /// radius. Scanning continues past it so that every input gets the prune
    /// test.
    fn scan(&self, candidate: &[u8], budget: usize) -> Result<Scan, SearchError> {
        // Radii near usize::MAX saturate; any radius >= L solves at the root.
        let reach = self.radius.saturating_add(budget);
        let mut witness = None;
        for (i, s) in self.instance.strings().iter().enumerate() {
            match hamming_distance_within(candidate, s, reach)? {
                None => return Ok(Scan::Prune),
                Some(dist) if dist > self.radius && witness.is_none() => witness = Some(i),
                Some(_) => {}
            }
        }
        Ok(witness.map_or(Scan::Solved, Scan::Witness))
    }

    /// The first `radius + 1` positions where `candidate` and `witness` differ.
    fn branch_positions(&self, candidate: &[u8], witness: &[u8]) -> Result<Vec<usize>, SearchError> {
        let mut positions = mismatch_positions(candidate, witness)?;
        let branching = self.radius.saturating_add(1);
        debug_assert!(
            positions.len() >= branching,
            "witness distance exceeds radius, so it has at least radius + 1 mismatches"
        );
        if positions.len() < branching {
            return Err(SearchError::InvariantViolation {
                mismatches: positions.len(),
                radius: self.radius,
            });
        }
        positions.truncate(branching);
        Ok(positions)
    }
}

/// Copy of `candidate` with position `p` set to `symbol`.
#[inline]
fn substitute(candidate: &[u8], p: usize, symbol: u8) -> Vec<u8> {
    let mut child = candidate.to_vec();
    child[p] = symbol;
    child
}

// ============================================================================
// Tests
// ============================================================================
