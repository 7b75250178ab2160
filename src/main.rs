use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use closest_string::alphabet::Alphabet;
use closest_string::generate::{generate, GenerationStrategy};
use closest_string::instance::Instance;
use closest_string::search::{Solution, Solver, SolverConfig};
use closest_string::seed::pick_seed;
use closest_string::sweep::{run_sweep, SweepConfig};
use closest_string::validate::validate_for_instance;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "closest-string", version, about = "Bounded search tree solver for the Closest String Problem")]
struct Cli {
    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve an instance file (one string per line)
    Solve {
        /// Instance file
        file: PathBuf,
        /// Target radius D
        #[arg(short, long)]
        radius: usize,
        /// Reject instances with symbols outside this alphabet
        #[arg(long)]
        alphabet: Option<Alphabet>,
        #[command(flatten)]
        solver: SolverArgs,
    },
    /// Write a random instance
    Generate {
        /// Number of strings
        #[arg(short)]
        k: usize,
        /// String length
        #[arg(short = 'l', long)]
        length: usize,
        /// Radius used when planting
        #[arg(short, long)]
        radius: usize,
        /// Draw independent strings instead of planting a centre
        #[arg(long)]
        uniform: bool,
        /// Alphabet symbols
        #[arg(long, default_value = "actg")]
        alphabet: Alphabet,
        /// Deterministic seed
        #[arg(long)]
        seed: Option<u64>,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Time the solver over a grid of radii and instance sizes
    Sweep {
        /// Comma-separated radii
        #[arg(long, value_delimiter = ',', default_value = "5,10,15,20")]
        radii: Vec<usize>,
        /// Smallest k
        #[arg(long, default_value_t = 5)]
        k_min: usize,
        /// Largest k (inclusive)
        #[arg(long, default_value_t = 25)]
        k_max: usize,
        /// String length
        #[arg(short = 'l', long, default_value_t = 50)]
        length: usize,
        /// Trials per cell
        #[arg(long, default_value_t = 10)]
        trials: usize,
        /// Alphabet symbols
        #[arg(long, default_value = "actg")]
        alphabet: Alphabet,
        /// Deterministic base seed
        #[arg(long)]
        seed: Option<u64>,
        /// CSV output file
        #[arg(short, long, default_value = "output.csv")]
        output: PathBuf,
        #[command(flatten)]
        solver: SolverArgs,
    },
}

#[derive(Debug, Args)]
struct SolverArgs {
    /// Explore sibling branches in parallel
    #[arg(long)]
    parallel: bool,
    /// Tree depth below which branches run in parallel
    #[arg(long, default_value_t = 2)]
    parallel_depth: usize,
}

impl From<SolverArgs> for SolverConfig {
    fn from(args: SolverArgs) -> Self {
        Self {
            parallel: args.parallel,
            parallel_depth: args.parallel_depth,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Solve {
            file,
            radius,
            alphabet,
            solver,
        } => solve_file(&file, radius, alphabet.as_ref(), solver.into()),
        Command::Generate {
            k,
            length,
            radius,
            uniform,
            alphabet,
            seed,
            output,
        } => {
            anyhow::ensure!(k > 0, "k must be at least 1");
            let strategy = if uniform {
                GenerationStrategy::Uniform
            } else {
                GenerationStrategy::Planted
            };
            let mut rng = SmallRng::seed_from_u64(seed.unwrap_or_else(rand::random::<u64>));
            let instance = generate(&mut rng, strategy, &alphabet, k, length, radius);
            match output {
                Some(path) => instance.save_to_file(&path)?,
                None => instance.write_to(std::io::stdout().lock())?,
            }
            Ok(())
        }
        Command::Sweep {
            radii,
            k_min,
            k_max,
            length,
            trials,
            alphabet,
            seed,
            output,
            solver,
        } => {
            let cfg = SweepConfig {
                radii,
                k_min,
                k_max,
                length,
                trials,
                seed,
                alphabet,
                solver: solver.into(),
            };
            let file = std::fs::File::create(&output)
                .with_context(|| format!("creating {}", output.display()))?;
            let report = run_sweep(&cfg, std::io::BufWriter::new(file))?;
            println!(
                "Solved {}/{} instances ({:.1}%). Timings written to {}",
                report.found(),
                report.total(),
                report.found_rate() * 100.0,
                output.display()
            );
            Ok(())
        }
    }
}

fn solve_file(
    file: &Path,
    radius: usize,
    alphabet: Option<&Alphabet>,
    cfg: SolverConfig,
) -> anyhow::Result<()> {
    let instance = load_instance(file, radius, alphabet)?;
    let solution = solve_checked(&instance, cfg)?;

    let mut stdout = std::io::stdout().lock();
    match solution {
        Solution::Found(s) => {
            stdout.write_all(&s)?;
            writeln!(stdout)?;
            Ok(())
        }
        Solution::NotFound => {
            writeln!(stdout, "not found")?;
            stdout.flush()?;
            std::process::exit(1);
        }
    }
}

/// Loads an instance and, when given, checks its symbols against `alphabet`.
fn load_instance(file: &Path, radius: usize, alphabet: Option<&Alphabet>) -> anyhow::Result<Instance> {
    let instance = Instance::load_from_file(file, radius)?;
    if let Some(alphabet) = alphabet {
        alphabet
            .check_strings(instance.strings())
            .with_context(|| format!("checking {}", file.display()))?;
    }
    tracing::info!(
        k = instance.len(),
        length = instance.string_len(),
        radius,
        spread = instance.max_pairwise_distance(),
        "instance loaded"
    );
    Ok(instance)
}

/// Runs the search from the chosen seed and re-checks any solution it returns.
fn solve_checked(instance: &Instance, cfg: SolverConfig) -> anyhow::Result<Solution> {
    let seed = pick_seed(instance);
    let solver = Solver::new(instance, instance.radius(), cfg);
    let solution = solver.run(&seed)?;
    let stats = solver.stats();
    tracing::info!(nodes = stats.nodes, pruned = stats.pruned, "search complete");

    if let Solution::Found(s) = &solution {
        validate_for_instance(instance, s).context("solver returned an invalid centre")?;
    }
    Ok(solution)
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "closest_string=info",
        1 => "closest_string=debug",
        _ => "closest_string=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn directive_defaults() {
        assert_eq!(directive_for_verbosity(0), "closest_string=info");
        assert_eq!(directive_for_verbosity(1), "closest_string=debug");
        assert_eq!(directive_for_verbosity(5), "closest_string=trace");
    }

    #[test]
    fn sweep_defaults_match_library_defaults() {
        let cli = Cli::try_parse_from(["closest-string", "sweep"]).unwrap();
        let Command::Sweep {
            radii,
            k_min,
            k_max,
            length,
            trials,
            solver,
            ..
        } = cli.command
        else {
            panic!("expected sweep");
        };
        let defaults = SweepConfig::default();
        assert_eq!(radii, defaults.radii);
        assert_eq!((k_min, k_max, length, trials), (defaults.k_min, defaults.k_max, defaults.length, defaults.trials));
        assert!(!solver.parallel);
    }

    #[test]
    fn parses_solve_arguments() {
        let cli = Cli::try_parse_from(["closest-string", "-v", "solve", "in.txt", "--radius", "3", "--parallel"])
            .unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Command::Solve {
                file,
                radius,
                alphabet,
                solver,
            } => {
                assert_eq!(file, PathBuf::from("in.txt"));
                assert_eq!(radius, 3);
                assert!(alphabet.is_none());
                assert!(solver.parallel);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_solve_alphabet() {
        let cli = Cli::try_parse_from(["closest-string", "solve", "in.txt", "-r", "1", "--alphabet", "01"]).unwrap();
        let Command::Solve { alphabet, .. } = cli.command else {
            panic!("expected solve");
        };
        assert_eq!(alphabet.map(|a| a.symbols().to_vec()), Some(b"01".to_vec()));
        assert!(Cli::try_parse_from(["closest-string", "solve", "in.txt", "-r", "1", "--alphabet", "00"]).is_err());
    }

    #[test]
    fn load_rejects_symbols_outside_alphabet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("instance.txt");
        std::fs::write(&path, "acgt\nacut\n").unwrap();

        assert!(load_instance(&path, 1, None).is_ok());
        let err = load_instance(&path, 1, Some(&Alphabet::dna())).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<closest_string::error::InstanceError>(),
            Some(closest_string::error::InstanceError::SymbolOutsideAlphabet { index: 1, position: 2, symbol: 'u' })
        ));
    }

    #[test]
    fn solve_checked_returns_valid_centres() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("instance.txt");
        std::fs::write(&path, "# planted around aaaa\naaab\naaaa\naaba\n").unwrap();

        let instance = load_instance(&path, 1, Some(&Alphabet::new(b"ab".to_vec()).unwrap())).unwrap();
        assert_eq!(instance.max_pairwise_distance(), 2);
        for parallel in [false, true] {
            let cfg = SolverConfig { parallel, parallel_depth: 2 };
            let solution = solve_checked(&instance, cfg).unwrap();
            assert_eq!(solution, Solution::Found(b"aaaa".to_vec()));
        }

        let far = Instance::from_strs(&["aaaa", "bbbb"], 1).unwrap();
        assert_eq!(solve_checked(&far, SolverConfig::default()).unwrap(), Solution::NotFound);
    }
}
