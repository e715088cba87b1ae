//! # CLI — Subcommand Runners
//!
//! Thin glue between the parsed command line and the library: builds the
//! precompute context where one is needed, streams result lines to stdout,
//! and maps library failures through anyhow for a diagnosable nonzero
//! exit.

use anyhow::{ensure, Context, Result};
use tracing::info;

use primerace::bounds;
use primerace::precompute::Precompute;
use primerace::search::{self, Outcome, SearchConfig};

/// Build the context and run the sign-change scan, printing one report
/// per completed iteration.
pub fn run_search(max_prime: u64, start: u64, ceiling: u64, json: bool) -> Result<()> {
    let ctx = Precompute::build(max_prime).context("precompute failed")?;

    info!(start, ceiling, "starting scan");
    let outcome = search::run(&ctx, SearchConfig { start, ceiling }, |it| {
        if json {
            // Iteration is a plain record; serialization cannot fail.
            println!("{}", serde_json::to_string(it).expect("serialize iteration"));
        } else {
            let qualifier = if it.estimated { "(using estimates) " } else { "" };
            println!(
                "{}x: {} numerator: {} denominator: {} step: {}",
                qualifier, it.x, it.numerator, it.denominator, it.step
            );
            println!("ratio: ~ {:.5}\n", it.ratio());
        }
    })
    .context("scan failed")?;

    match outcome {
        Outcome::SignChange { x } => info!(x, "sign change found"),
        Outcome::CeilingReached { x } => info!(x, "ceiling reached without a sign change"),
    }
    Ok(())
}

/// Build the context and print the exact counts at `n`.
pub fn run_count(max_prime: u64, n: u64) -> Result<()> {
    ensure!(
        n <= max_prime,
        "threshold {} exceeds the sieve ceiling {} (raise --max-prime)",
        n,
        max_prime
    );
    let ctx = Precompute::build(max_prime).context("precompute failed")?;
    let counts = ctx.count(n)?;
    println!("pi_odd({}) = {}", n, counts.primes);
    println!("pi3({}) = {}", n, counts.primes3);
    Ok(())
}

/// Print the conservative bounds at each threshold; no precompute needed.
pub fn run_bounds(thresholds: &[u64]) -> Result<()> {
    for &x in thresholds {
        ensure!(x > 1, "bounds are only defined for x > 1 (got {})", x);
        println!(
            "x: {} pi_upper: {} pi3_lower: {}",
            x,
            bounds::upper_bound_primes(x),
            bounds::lower_bound_primes3(x)
        );
    }
    Ok(())
}
