//! Benchmark sweep over radii and instance sizes.
//!
//! For each `(radius, k)` cell the sweep generates planted instances, times
//! seed selection plus the bounded search, and writes the mean time per cell
//! as a `d,k,time` CSV row (microseconds).

use crate::alphabet::Alphabet;
use crate::error::SweepError;
use crate::generate::generate_planted;
use crate::search::{Solver, SolverConfig};
use crate::seed::pick_seed;
use crate::validate::validate_solution;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

// ============================================================================
// Configuration
// ============================================================================

/// Sweep configuration parameters.
#[derive(Clone, Debug)]
pub struct SweepConfig {
    /// Radii to test, in order.
    pub radii: Vec<usize>,
    /// Smallest number of strings per instance.
    pub k_min: usize,
    /// Largest number of strings per instance (inclusive).
    pub k_max: usize,
    /// String length `L`.
    pub length: usize,
    /// Instances per cell; the reported time is their mean.
    pub trials: usize,
    /// Optional deterministic base seed.
    pub seed: Option<u64>,
    /// Symbols used for generated strings.
    pub alphabet: Alphabet,
    /// Search settings used for every trial.
    pub solver: SolverConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            radii: vec![5, 10, 15, 20],
            k_min: 5,
            k_max: 25,
            length: 50,
            trials: 10,
            seed: None,
            alphabet: Alphabet::dna(),
            solver: SolverConfig::default(),
        }
    }
}

impl SweepConfig {
    /// Checks that the configuration describes at least one non-empty cell.
    ///
    /// # Errors
    /// Returns [`SweepError::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.radii.is_empty() {
            return Err(SweepError::InvalidConfig("no radii given".into()));
        }
        if self.k_min == 0 {
            return Err(SweepError::InvalidConfig("k_min must be at least 1".into()));
        }
        if self.k_min > self.k_max {
            return Err(SweepError::InvalidConfig(format!(
                "k_min ({}) exceeds k_max ({})",
                self.k_min, self.k_max
            )));
        }
        if self.trials == 0 {
            return Err(SweepError::InvalidConfig("trials must be at least 1".into()));
        }
        Ok(())
    }
}

// ============================================================================
// Results
// ============================================================================

/// Measurements for one `(radius, k)` cell.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepRow {
    /// Target radius `D`.
    pub radius: usize,
    /// Number of strings.
    pub k: usize,
    /// Mean wall-clock time per trial, in microseconds.
    pub mean_micros: f64,
    /// Trials that produced a solution.
    pub found: usize,
    /// Trials run.
    pub trials: usize,
    /// Search-tree nodes visited over all trials.
    pub nodes: u64,
}

/// All rows of a sweep.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SweepReport {
    /// One row per cell, radius-major.
    pub rows: Vec<SweepRow>,
}

impl SweepReport {
    /// Trials that produced a solution.
    pub fn found(&self) -> usize {
        self.rows.iter().map(|r| r.found).sum()
    }

    /// Trials run.
    pub fn total(&self) -> usize {
        self.rows.iter().map(|r| r.trials).sum()
    }

    /// Fraction of trials that produced a solution (0 for an empty report).
    pub fn found_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.found() as f64 / total as f64
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// CSV header written before the rows.
pub const CSV_HEADER: &str = "d,k,time";

/// Runs the sweep and writes CSV rows to `out` as cells complete.
///
/// # Errors
/// Returns an error for an invalid configuration, a failed write, or a
/// solver result that does not validate.
pub fn run_sweep<W: Write>(cfg: &SweepConfig, mut out: W) -> Result<SweepReport, SweepError> {
    cfg.validate()?;
    let base_seed = cfg.seed.unwrap_or_else(rand::random::<u64>);
    info!(
        radii = ?cfg.radii,
        k_min = cfg.k_min,
        k_max = cfg.k_max,
        length = cfg.length,
        trials = cfg.trials,
        base_seed,
        "starting sweep"
    );

    writeln!(out, "{CSV_HEADER}")?;
    let mut report = SweepReport::default();
    let mut trial_id = 0u64;

    for &radius in &cfg.radii {
        for k in cfg.k_min..=cfg.k_max {
            let row = run_cell(cfg, radius, k, base_seed, &mut trial_id)?;
            info!(
                d = radius,
                k,
                mean_micros = row.mean_micros,
                found = row.found,
                trials = row.trials,
                "cell done"
            );
            writeln!(out, "{},{},{}", row.radius, row.k, row.mean_micros)?;
            report.rows.push(row);
        }
    }
    out.flush()?;

    info!(
        found = report.found(),
        total = report.total(),
        rate = report.found_rate(),
        "sweep finished"
    );
    Ok(report)
}

// ============================================================================
// Internal
// ============================================================================

fn run_cell(
    cfg: &SweepConfig,
    radius: usize,
    k: usize,
    base_seed: u64,
    trial_id: &mut u64,
) -> Result<SweepRow, SweepError> {
    let mut micros = 0u128;
    let mut found = 0usize;
    let mut nodes = 0u64;

    for _ in 0..cfg.trials {
        let mut rng = SmallRng::seed_from_u64(splitmix64(base_seed ^ *trial_id));
        *trial_id += 1;
        let instance = generate_planted(&mut rng, &cfg.alphabet, k, cfg.length, radius);

        let start = Instant::now();
        let seed = pick_seed(&instance);
        let solver = Solver::new(&instance, radius, cfg.solver.clone());
        let solution = solver.run(&seed)?;
        micros += start.elapsed().as_micros();

        nodes += solver.stats().nodes;
        if let Some(s) = solution.as_bytes() {
            validate_solution(&instance, s, radius)
                .map_err(|source| SweepError::InvalidSolution { radius, k, source })?;
            found += 1;
        } else {
            debug!(d = radius, k, "trial found no solution");
        }
    }

    Ok(SweepRow {
        radius,
        k,
        mean_micros: micros as f64 / cfg.trials as f64,
        found,
        trials: cfg.trials,
        nodes,
    })
}

/// SplitMix64 mixer for deriving per-trial seeds from a base seed.
#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

// ============================================================================
// Tests
// ============================================================================
