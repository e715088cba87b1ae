//! # Search — Adaptive Sign-Change Scan
//!
//! The outer loop consuming the counting layer: for each odd candidate
//! threshold x it accumulates a Legendre-style sum over the primes p with
//! p² ≤ x, comparing the count of primes ≡ 3 (mod 4) below x/p (the
//! numerator) against the count of all odd primes below x/p (the
//! denominator). The scan terminates at the first x where
//! 4·numerator < denominator — the tracked discrepancy changes sign —
//! or at the hard ceiling.
//!
//! Past the sieve ceiling the exact counts are replaced by the
//! conservative estimators, whose rounding directions make a *false*
//! sign-change detection impossible: the denominator is never
//! under-counted and the numerator never over-counted.
//!
//! The step size doubles as the advance rule: x moves forward by
//! 2·(4·numerator − denominator), so the scan accelerates while the
//! discrepancy is large and slows as it narrows.

use serde::Serialize;

use crate::bounds;
use crate::counts::PrimeCounts;
use crate::error::Result;
use crate::precompute::Precompute;

/// Default first candidate threshold.
pub const DEFAULT_START: u64 = 9;

/// Hard ceiling on the candidate threshold.
pub const DEFAULT_CEILING: u64 = 12_000_000_000_000;

/// One completed outer-loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Iteration {
    pub x: u64,
    pub numerator: u64,
    pub denominator: u64,
    /// 4·numerator − denominator; negative exactly at the sign change.
    pub step: i64,
    /// True when at least one inner-loop limit exceeded the sieve ceiling,
    /// so this iteration's values rest on estimated bounds.
    pub estimated: bool,
}

impl Iteration {
    /// The tracked ratio; it approaches 1/4 from above as x grows.
    pub fn ratio(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

/// How a scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 4·numerator < denominator was observed at x.
    SignChange { x: u64 },
    /// The ceiling was reached without a sign change; x is the first
    /// candidate past it.
    CeilingReached { x: u64 },
}

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// First candidate threshold (odd).
    pub start: u64,
    /// Hard ceiling on the candidate threshold.
    pub ceiling: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            start: DEFAULT_START,
            ceiling: DEFAULT_CEILING,
        }
    }
}

/// Run the scan, reporting every completed iteration to `observer`.
pub fn run<F>(ctx: &Precompute, config: SearchConfig, mut observer: F) -> Result<Outcome>
where
    F: FnMut(&Iteration),
{
    let mut x = config.start;
    while x < config.ceiling {
        let mut numerator = 0u64;
        let mut denominator = 0u64;
        let mut index = 0usize;
        let mut p3_index = 0u64;
        let mut estimated = false;

        loop {
            let p = ctx.primes().get(index)?;
            if p * p > x {
                break;
            }
            let limit = x / p;
            let counts = if limit > ctx.max_prime() {
                estimated = true;
                PrimeCounts {
                    primes: bounds::upper_bound_primes(limit),
                    primes3: bounds::lower_bound_primes3(limit),
                }
            } else {
                ctx.count(limit)?
            };

            // The first `index` list primes all lie at or below `limit`,
            // so the subtraction cannot underflow.
            denominator += counts.primes - index as u64;
            if p % 4 == 3 {
                numerator += counts.primes3 - p3_index;
                p3_index += 1;
            }
            index += 1;
        }

        let step = 4 * (numerator as i64) - denominator as i64;
        let iteration = Iteration {
            x,
            numerator,
            denominator,
            step,
            estimated,
        };
        observer(&iteration);

        if step < 0 {
            return Ok(Outcome::SignChange { x });
        }
        x += 2 * step as u64;
    }
    Ok(Outcome::CeilingReached { x })
}
