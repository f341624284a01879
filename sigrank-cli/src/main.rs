mod config;
mod load;
mod output;

use clap::Parser;
use sigrank_core::constants::{DEFAULT_SEED, DEFAULT_TRIALS};
use sigrank_core::{rank_systems, RankOptions, SystemMap};
use std::path::PathBuf;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "sigrank",
    version,
    about = "Rank systems from pairwise human judgments with bootstrap significance clusters"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Rank every configured dimension from judgment CSVs
    Rank(RankArgs),
    /// Create a default config file at ~/.config/sigrank/config.toml
    Init,
}

#[derive(Parser)]
struct RankArgs {
    /// Directory holding the judgment CSVs (one or more batch files per dimension)
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Number of bootstrap trials per dimension
    #[arg(long)]
    trials: Option<usize>,

    /// Master seed for the per-trial seed pool
    #[arg(long)]
    seed: Option<u64>,

    /// Restrict the run to a dimension (repeatable; default: all configured)
    #[arg(long = "dimension")]
    dimensions: Vec<String>,

    /// Output JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Show progress during execution
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (default: ~/.config/sigrank/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank(args) => run_rank(args),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your system map and dimensions.");
        }
    }
}

fn run_rank(args: RankArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    if cfg.systems.is_empty() {
        bail(format!(
            "No systems configured. Add a [systems] table to {} (or run `sigrank init`)",
            config_path.display()
        ));
    }
    let pairs: Vec<(&str, &str)> = cfg
        .systems
        .iter()
        .map(|(code, name)| (code.as_str(), name.as_str()))
        .collect();
    let systems = SystemMap::from_pairs(&pairs);

    let dimensions = if args.dimensions.is_empty() {
        cfg.dimensions.clone()
    } else {
        args.dimensions.clone()
    };
    if dimensions.is_empty() {
        bail(format!(
            "No dimensions configured. Pass --dimension or set dimensions in {}",
            config_path.display()
        ));
    }

    let options = RankOptions {
        trials: args.trials.or(cfg.trials).unwrap_or(DEFAULT_TRIALS),
        seed: args.seed.or(cfg.seed).unwrap_or(DEFAULT_SEED),
    };

    let mut json_reports = Vec::new();
    let mut failed = false;

    // Dimensions are independent: a fatal error halts only its own
    // dimension, and the run exits non-zero at the end.
    for dimension in &dimensions {
        let records = load::load_dimension(&args.data_dir, dimension, &cfg.columns);

        if records.is_empty() {
            eprintln!(
                "Warning: no judgment records for \"{dimension}\" in {}",
                args.data_dir.display()
            );
        }
        if args.verbose {
            eprintln!(
                "{dimension}: {} records, {} trials, seed {}",
                records.len(),
                options.trials,
                options.seed,
            );
        }

        match rank_systems(&records, &systems, &options) {
            Ok(report) => {
                if args.json {
                    json_reports.push((dimension.clone(), report));
                } else {
                    output::print_dimension(dimension, &report);
                }
            }
            Err(e) => {
                eprintln!("Error: dimension \"{dimension}\" failed: {e}");
                failed = true;
            }
        }
    }

    if args.json {
        output::print_json(&json_reports);
    }
    if failed {
        std::process::exit(1);
    }
}
