//! # Primes — Materialized Odd-Prime List
//!
//! The ascending list of odd primes that drives the search's inner loop.
//! The first eight entries are the wheel primes other than 2 (they are not
//! represented in the sieve); the remainder is drawn from the sieve in
//! increasing index order. The list is sized once, from the exact count at
//! min(10^7, ceiling), which keeps it comfortably past the square root of
//! any threshold a default search reaches before estimates take over.

use crate::counts::CountCache;
use crate::error::{Error, Result};
use crate::sieve::WheelSieve;
use crate::wheel::Wheel;

/// Wheel primes other than 2, hardcoded at the head of the list.
pub const SMALL_ODD_PRIMES: [u64; 8] = [3, 5, 7, 11, 13, 17, 19, 23];

/// Sizing bound: the list holds every odd prime up to min(this, ceiling).
const SIZING_BOUND: u64 = 10_000_000;

/// Ascending odd primes, no duplicates, 2 excluded.
pub struct PrimeList {
    primes: Vec<u64>,
}

impl PrimeList {
    pub fn build(
        wheel: &Wheel,
        sieve: &WheelSieve,
        counts: &CountCache,
        max_prime: u64,
    ) -> Result<Self> {
        let sizing = SIZING_BOUND.min(max_prime);
        let target = counts.count_exact(sizing, wheel, sieve)?.primes as usize;

        let mut primes: Vec<u64> = Vec::new();
        primes
            .try_reserve_exact(target)
            .map_err(Error::allocation::<u64>("prime list", target))?;
        primes.extend_from_slice(&SMALL_ODD_PRIMES[..target.min(SMALL_ODD_PRIMES.len())]);

        let mut i = 0u64;
        while primes.len() < target {
            let v = wheel.value_of(i);
            if v > max_prime {
                break;
            }
            if sieve.is_set(i) {
                primes.push(v);
            }
            i += 1;
        }
        if primes.len() < target {
            return Err(Error::PrimeListExhausted {
                index: primes.len(),
                len: target,
            });
        }
        Ok(PrimeList { primes })
    }

    /// Prime at `index`, or [`Error::PrimeListExhausted`] past the end —
    /// the search loop turns that into a diagnosable fault instead of an
    /// out-of-range read.
    #[inline]
    pub fn get(&self, index: usize) -> Result<u64> {
        self.primes
            .get(index)
            .copied()
            .ok_or(Error::PrimeListExhausted {
                index,
                len: self.primes.len(),
            })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// The full list, ascending.
    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.primes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    /// With a 10^6 ceiling the sizing query is clamped to the ceiling, so
    /// the list holds every odd prime below it: 78497 entries.
    #[test]
    fn list_length_matches_exact_count() {
        let ctx = testutil::context_1m();
        assert_eq!(ctx.primes().len(), 78_497);
    }

    /// Head: the eight hardcoded wheel primes, then the sieve takes over
    /// at 29.
    #[test]
    fn list_head() {
        let ctx = testutil::context_1m();
        assert_eq!(
            &ctx.primes().as_slice()[..10],
            &[3, 5, 7, 11, 13, 17, 19, 23, 29, 31]
        );
    }

    /// Strictly ascending, no duplicates, 2 never appears.
    #[test]
    fn list_is_strictly_ascending_without_two() {
        let ctx = testutil::context_1m();
        let primes = ctx.primes().as_slice();
        assert!(primes.iter().all(|&p| p != 2));
        for w in primes.windows(2) {
            assert!(w[0] < w[1], "not ascending at {:?}", w);
        }
    }

    /// Sampled entries really are prime, and the tail is the largest prime
    /// below the ceiling.
    #[test]
    fn list_entries_are_prime() {
        let ctx = testutil::context_1m();
        let primes = ctx.primes().as_slice();
        for &p in primes.iter().step_by(1009) {
            assert!(testutil::is_prime(p), "{} in list but composite", p);
        }
        assert_eq!(*primes.last().unwrap(), 999_983);
    }

    /// Indexing past the end is the typed precondition fault.
    #[test]
    fn get_past_end_is_exhaustion() {
        let ctx = testutil::context_1m();
        let len = ctx.primes().len();
        assert!(ctx.primes().get(len - 1).is_ok());
        match ctx.primes().get(len) {
            Err(crate::error::Error::PrimeListExhausted { index, len: l }) => {
                assert_eq!(index, len);
                assert_eq!(l, len);
            }
            other => panic!("expected PrimeListExhausted, got {:?}", other),
        }
    }
}
