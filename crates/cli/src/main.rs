//! Trace-driven cache simulator CLI.
//!
//! This binary provides two simulation modes. It performs:
//! 1. **Single run:** Feed a hexadecimal address trace through one cache and print its statistics.
//! 2. **Sweep:** Run the same trace over every power-of-two associativity under both policies.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cachesim_core::Config;
use cachesim_core::common::SimError;
use cachesim_core::config::ReplacementPolicy;
use cachesim_core::sim::{self, Simulator, TraceReader};

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    author,
    version,
    about = "Trace-driven cache simulator",
    long_about = "Simulate a set-associative cache over a trace of hexadecimal addresses.\n\nGeometry comes from built-in defaults (32 B, 4 B blocks, direct-mapped, LRU), an optional JSON config, and command-line overrides, in that order.\n\nExamples:\n  cachesim run -t traces.txt\n  cachesim run -t traces.txt --size 1024 --block 16 --ways 4 --policy random --seed 7\n  cachesim sweep -t traces.txt --size 256 --block 8"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate one cache configuration.
    Run {
        #[command(flatten)]
        cache: CacheArgs,

        /// Stop after this many accesses.
        #[arg(long)]
        limit: Option<usize>,

        /// Print the outcome of every access.
        #[arg(long)]
        show_accesses: bool,
    },

    /// Simulate every power-of-two associativity under LRU and Random.
    Sweep {
        #[command(flatten)]
        cache: CacheArgs,
    },
}

#[derive(Args, Debug)]
struct CacheArgs {
    /// Trace file: whitespace-separated hexadecimal addresses.
    #[arg(short, long)]
    trace: PathBuf,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Total cache size in bytes.
    #[arg(long)]
    size: Option<u64>,

    /// Block (line) size in bytes.
    #[arg(long)]
    block: Option<u64>,

    /// Associativity (ways per set).
    #[arg(long)]
    ways: Option<u32>,

    /// Replacement policy.
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// Seed for random replacement.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyArg {
    Lru,
    Random,
}

impl From<PolicyArg> for ReplacementPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Lru => Self::Lru,
            PolicyArg::Random => Self::Random,
        }
    }
}

impl CacheArgs {
    /// Layers command-line overrides over the config file (or defaults).
    fn resolve(&self) -> Result<Config, SimError> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        let cache = &mut config.cache;
        if let Some(size) = self.size {
            cache.size_bytes = size;
        }
        if let Some(block) = self.block {
            cache.block_bytes = block;
        }
        if let Some(ways) = self.ways {
            cache.ways = ways;
        }
        if let Some(policy) = self.policy {
            cache.policy = policy.into();
        }
        if let Some(seed) = self.seed {
            cache.seed = seed;
        }
        debug!(?config, "resolved configuration");
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            cache,
            limit,
            show_accesses,
        } => cmd_run(&cache, limit, show_accesses),
        Commands::Sweep { cache } => cmd_sweep(&cache),
    };

    if let Err(err) = result {
        eprintln!("[!] {err}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs a single configuration over the trace and prints its report.
fn cmd_run(args: &CacheArgs, limit: Option<usize>, show_accesses: bool) -> Result<(), SimError> {
    let mut config = args.resolve()?;
    if limit.is_some() {
        config.general.max_accesses = limit;
    }
    config.general.trace_accesses |= show_accesses;

    let mut sim = Simulator::new(&config)?;
    let report = sim.run_trace(TraceReader::open(&args.trace)?)?;
    println!("{report}");
    Ok(())
}

/// Runs the associativity sweep and prints one summary row per configuration.
fn cmd_sweep(args: &CacheArgs) -> Result<(), SimError> {
    let config = args.resolve()?;
    let addresses = sim::read_trace(&args.trace)?;
    let reports = sim::sweep(&config, &addresses)?;

    println!(
        "{:>6} {:>8} {:>8} {:>10} {:>10} {:>8}",
        "ways", "sets", "policy", "hits", "misses", "hit%"
    );
    for report in &reports {
        println!(
            "{:>6} {:>8} {:>8} {:>10} {:>10} {:>7.2}%",
            report.geometry.associativity(),
            report.geometry.num_sets(),
            report.policy.to_string(),
            report.stats.hits,
            report.stats.misses,
            report.stats.hit_rate() * 100.0
        );
    }
    Ok(())
}
