//! # Counts — Block-Prefix Prime Counting
//!
//! Turns arbitrary exact counting queries into bounded work: a forward
//! pass over the sieve records, for every 8192-wide block, the number of
//! odd primes (and of those ≡ 3 mod 4) strictly below the block start.
//! `count_exact(n)` then costs one cache lookup plus at most one block of
//! classify-and-probe work.
//!
//! ## Baseline offset
//!
//! The wheel primes 3,5,7,11,13,17,19,23 are not represented in the index
//! space, so the forward pass never sees them. Their contribution (+8
//! primes, +5 of which are ≡ 3 mod 4: 3,7,11,19,23) is folded into every
//! cache slot except slot 0 — the scan for queries inside the first block
//! picks the small primes up one by one instead.
//!
//! 2 is excluded from every count in this layer.

use crate::error::{Error, Result};
use crate::sieve::WheelSieve;
use crate::wheel::{Wheel, WheelClass};

/// Width of one prefix-count block.
pub const BLOCK_WIDTH: u64 = 8192;

/// Wheel primes other than 2, the fixed baseline of every slot ≥ 1.
const BASELINE_PRIMES: u64 = 8;
/// How many of the baseline primes are ≡ 3 mod 4 (3, 7, 11, 19, 23).
const BASELINE_PRIMES3: u64 = 5;

/// Exact counts of odd primes, and of those ≡ 3 mod 4, at or below a
/// queried threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeCounts {
    pub primes: u64,
    pub primes3: u64,
}

/// Immutable prefix-count cache over a [`WheelSieve`].
pub struct CountCache {
    num_primes: Vec<u64>,
    num_primes3: Vec<u64>,
    max_prime: u64,
}

impl CountCache {
    /// Single forward pass over the sieve: backfill each slot with the
    /// counts strictly below its start, then fold in the baseline.
    pub fn build(wheel: &Wheel, sieve: &WheelSieve, max_prime: u64) -> Result<Self> {
        let num_slots = (max_prime / BLOCK_WIDTH + 1) as usize;
        let mut num_primes = zeroed("prime count cache", num_slots)?;
        let mut num_primes3 = zeroed("prime3 count cache", num_slots)?;

        let mut slot = 0usize;
        let mut pc = 0u64;
        let mut p3c = 0u64;
        let mut i = 0u64;
        loop {
            let v = wheel.value_of(i);
            if v > max_prime {
                break;
            }
            if sieve.is_set(i) {
                // Slots filled before the increment hold counts strictly
                // below their starting value.
                while slot < (v / BLOCK_WIDTH + 1) as usize {
                    num_primes[slot] = pc;
                    num_primes3[slot] = p3c;
                    slot += 1;
                }
                pc += 1;
                if v % 4 == 3 {
                    p3c += 1;
                }
            }
            i += 1;
        }
        while slot < num_slots {
            num_primes[slot] = pc;
            num_primes3[slot] = p3c;
            slot += 1;
        }

        // Slot 0 covers the region where the scan still encounters the
        // small primes directly; every later slot carries them as offset.
        for k in 1..num_slots {
            num_primes[k] += BASELINE_PRIMES;
            num_primes3[k] += BASELINE_PRIMES3;
        }

        Ok(CountCache {
            num_primes,
            num_primes3,
            max_prime,
        })
    }

    /// Exact π(n) and π₃(n) restricted to odd primes.
    ///
    /// Fails with [`Error::CeilingExceeded`] when `n` is beyond the sieve
    /// ceiling; the conservative estimators take over there.
    pub fn count_exact(&self, n: u64, wheel: &Wheel, sieve: &WheelSieve) -> Result<PrimeCounts> {
        if n > self.max_prime {
            return Err(Error::CeilingExceeded {
                query: n,
                max_prime: self.max_prime,
            });
        }
        let slot = (n / BLOCK_WIDTH) as usize;
        let mut pc = self.num_primes[slot];
        let mut p3c = self.num_primes3[slot];

        let mut v = slot as u64 * BLOCK_WIDTH;
        while v <= n {
            let prime = match wheel.classify(v)? {
                WheelClass::SmallPrime => true,
                WheelClass::Coprime(idx) => sieve.is_set(idx),
                WheelClass::HasSmallFactor => false,
            };
            if prime {
                pc += 1;
                if v % 4 == 3 {
                    p3c += 1;
                }
            }
            v += 1;
        }
        Ok(PrimeCounts {
            primes: pc,
            primes3: p3c,
        })
    }

    /// Number of cache slots.
    #[inline]
    pub fn num_slots(&self) -> usize {
        self.num_primes.len()
    }

    /// The ceiling this cache was built for.
    #[inline]
    pub fn max_prime(&self) -> u64 {
        self.max_prime
    }
}

fn zeroed(what: &'static str, len: usize) -> Result<Vec<u64>> {
    let mut v: Vec<u64> = Vec::new();
    v.try_reserve_exact(len)
        .map_err(Error::allocation::<u64>(what, len))?;
    v.resize(len, 0);
    Ok(v)
}
