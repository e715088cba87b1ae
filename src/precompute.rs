//! # Precompute — Immutable Counting Context
//!
//! The four large flat buffers the search consumes — wheel residue table,
//! primality bitset, prefix-count cache, prime list — built once at
//! startup in dependency order and owned by a single context object for
//! the lifetime of the process. Construction propagates every failure; a
//! partially-initialized context never reaches a dependent component.

use tracing::info;

use crate::counts::{CountCache, PrimeCounts};
use crate::error::Result;
use crate::primes::PrimeList;
use crate::sieve::WheelSieve;
use crate::wheel::Wheel;

/// Default sieve ceiling: exact counts are available up to here.
pub const DEFAULT_MAX_PRIME: u64 = 1_000_000_000;

pub struct Precompute {
    wheel: Wheel,
    sieve: WheelSieve,
    counts: CountCache,
    primes: PrimeList,
    max_prime: u64,
}

impl Precompute {
    /// Build the full context for the given sieve ceiling.
    pub fn build(max_prime: u64) -> Result<Self> {
        info!("precomputing wheel residues");
        let wheel = Wheel::build()?;
        Self::assemble(wheel, max_prime)
    }

    /// Build everything above an already-constructed wheel. The residue
    /// table does not depend on the ceiling, so callers holding one can
    /// reuse it across contexts.
    pub fn assemble(wheel: Wheel, max_prime: u64) -> Result<Self> {
        info!(max_prime, "precomputing prime table");
        let sieve = WheelSieve::build(&wheel, max_prime)?;
        info!("precomputing prime counts");
        let counts = CountCache::build(&wheel, &sieve, max_prime)?;
        info!("precomputing prime list");
        let primes = PrimeList::build(&wheel, &sieve, &counts, max_prime)?;
        info!(primes = primes.len(), "precompute complete");
        Ok(Precompute {
            wheel,
            sieve,
            counts,
            primes,
            max_prime,
        })
    }

    /// Exact π(n)/π₃(n) over odd primes, for n at or below the ceiling.
    #[inline]
    pub fn count(&self, n: u64) -> Result<PrimeCounts> {
        self.counts.count_exact(n, &self.wheel, &self.sieve)
    }

    #[inline]
    pub fn max_prime(&self) -> u64 {
        self.max_prime
    }

    #[inline]
    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    #[inline]
    pub fn sieve(&self) -> &WheelSieve {
        &self.sieve
    }

    #[inline]
    pub fn counts(&self) -> &CountCache {
        &self.counts
    }

    #[inline]
    pub fn primes(&self) -> &PrimeList {
        &self.primes
    }
}
