//! # Main — CLI Entry Point
//!
//! Routes subcommands to the library: `search` runs the full precompute
//! pipeline and the sign-change scan, `count` exposes the exact counting
//! layer directly, `bounds` evaluates the conservative estimators without
//! any precompute.
//!
//! ## Global Options
//!
//! - `--max-prime` / `MAX_PRIME`: sieve ceiling. Exact counts are served
//!   up to this bound; the directed-rounding estimators take over beyond
//!   it. Defaults to 10^9.
//!
//! Result lines go to stdout; progress and lifecycle logging go to stderr
//! (`LOG_FORMAT=json` for machine-readable logs).

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use primerace::precompute;
use primerace::search;

#[derive(Parser)]
#[command(
    name = "primerace",
    about = "Explore the mod-4 prime race for the point where its bias changes sign"
)]
struct Cli {
    /// Sieve ceiling: exact counts up to this bound, conservative
    /// estimates beyond it (minimum 24)
    #[arg(
        long,
        env = "MAX_PRIME",
        default_value_t = precompute::DEFAULT_MAX_PRIME,
        value_parser = parse_max_prime
    )]
    max_prime: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan candidate thresholds for the sign change
    Search {
        /// First candidate threshold (odd, at least 9)
        #[arg(long, default_value_t = search::DEFAULT_START, value_parser = parse_start)]
        start: u64,

        /// Hard ceiling on the candidate threshold
        #[arg(long, default_value_t = search::DEFAULT_CEILING)]
        ceiling: u64,

        /// Emit one JSON object per iteration instead of text lines
        #[arg(long)]
        json: bool,
    },
    /// Count odd primes (and those congruent to 3 mod 4) up to a threshold
    Count {
        /// Threshold to count up to (at most --max-prime)
        n: u64,
    },
    /// Evaluate the conservative prime-count bounds at thresholds beyond
    /// any sieve
    Bounds {
        /// Thresholds to estimate at (each greater than 1)
        #[arg(required = true)]
        x: Vec<u64>,
    },
}

fn parse_max_prime(s: &str) -> Result<u64, String> {
    let v: u64 = s.parse().map_err(|e| format!("{e}"))?;
    if v < 24 {
        return Err("sieve ceiling must be at least 24".into());
    }
    Ok(v)
}

fn parse_start(s: &str) -> Result<u64, String> {
    let v: u64 = s.parse().map_err(|e| format!("{e}"))?;
    if v < 9 || v % 2 == 0 {
        return Err("start must be odd and at least 9".into());
    }
    Ok(v)
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Structured logging: LOG_FORMAT=json for machine consumption,
    // human-readable on stderr otherwise.
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt().json().with_target(false).init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    match cli.command {
        Commands::Search {
            start,
            ceiling,
            json,
        } => cli::run_search(cli.max_prime, start, ceiling, json),
        Commands::Count { n } => cli::run_count(cli.max_prime, n),
        Commands::Bounds { x } => cli::run_bounds(&x),
    }
}
