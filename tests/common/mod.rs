//! Shared test helpers for integration tests.

#![allow(dead_code)]

use primerace::counts::PrimeCounts;
use primerace::precompute::Precompute;
use std::sync::OnceLock;

/// Context with a 10^6 sieve ceiling, built once per test binary — the
/// wheel residue table dominates construction time.
pub fn context_1m() -> &'static Precompute {
    static CTX: OnceLock<Precompute> = OnceLock::new();
    CTX.get_or_init(|| Precompute::build(1_000_000).expect("test context"))
}

/// Brute-force trial division, the independent primality reference.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Independent π/π₃ reference over odd primes, inclusive of `n`.
pub fn count_by_trial_division(n: u64) -> PrimeCounts {
    let mut primes = 0u64;
    let mut primes3 = 0u64;
    for v in 3..=n.max(2) {
        if is_prime(v) {
            primes += 1;
            if v % 4 == 3 {
                primes3 += 1;
            }
        }
    }
    PrimeCounts { primes, primes3 }
}
