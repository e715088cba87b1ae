//! # Wheel — Primorial-Wheel Index Space
//!
//! Maps the integers coprime to the first nine primes onto a compact linear
//! index space and back. The wheel modulus is the 9-primorial
//! P = 2·3·5·7·11·13·17·19·23 = 223,092,870; exactly T = 36,495,360
//! residues in [0, P) are coprime to P, so one wheel period compresses P
//! integers into T slots (~16.4% of the naive space). Every prime above 23
//! is coprime to P, so the index space covers all primality candidates the
//! sieve cares about.
//!
//! ## Index layout
//!
//! A linear index decomposes as `block = idx / T`, `offset = idx % T`; the
//! represented natural number is `block·P + residues[offset]`. The mapping
//! is a strictly monotonic bijection between indices and the integers
//! coprime to the wheel primes.
//!
//! ## Lookup
//!
//! `classify` resolves `n mod P` to its residue slot with a binary search
//! narrowed to an 8-entry window followed by a linear scan. A remainder
//! that survives the divisibility pre-check but has no slot means the
//! residue table itself is corrupt — that is surfaced as
//! [`Error::WheelInconsistency`], never ignored.

use crate::error::{Error, Result};

/// The nine wheel primes whose multiples are excluded from the index space.
pub const WHEEL_PRIMES: [u64; 9] = [2, 3, 5, 7, 11, 13, 17, 19, 23];

/// Product of the nine wheel primes (the 9-primorial).
pub const WHEEL_MODULUS: u64 = 223_092_870;

/// Count of residues in [0, WHEEL_MODULUS) coprime to the modulus.
pub const WHEEL_TOTIENT: u64 = 36_495_360;

/// Classification of a natural number against the wheel index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelClass {
    /// One of the wheel primes other than 2: prime, but not represented.
    SmallPrime,
    /// Divisible by a wheel prime: not represented (composite, or 2).
    HasSmallFactor,
    /// Coprime to the modulus: represented at the carried linear index.
    Coprime(u64),
}

/// The residue table, built once and immutable afterwards.
pub struct Wheel {
    residues: Vec<u64>,
}

impl Wheel {
    /// Enumerate [0, P) and keep the residues coprime to every wheel prime.
    ///
    /// Fails with [`Error::WheelCardinality`] if the survivor count is not
    /// exactly [`WHEEL_TOTIENT`], and with [`Error::Allocation`] if the
    /// ~292 MB table cannot be reserved.
    pub fn build() -> Result<Self> {
        let len = WHEEL_TOTIENT as usize;
        let mut residues: Vec<u64> = Vec::new();
        residues
            .try_reserve_exact(len)
            .map_err(Error::allocation::<u64>("wheel residue table", len))?;

        for i in 0..WHEEL_MODULUS {
            if WHEEL_PRIMES.iter().all(|&p| i % p != 0) {
                residues.push(i);
            }
        }
        if residues.len() != len {
            return Err(Error::WheelCardinality {
                expected: len,
                actual: residues.len(),
            });
        }
        Ok(Wheel { residues })
    }

    /// The natural number represented at linear index `idx`.
    #[inline]
    pub fn value_of(&self, idx: u64) -> u64 {
        WHEEL_MODULUS * (idx / WHEEL_TOTIENT) + self.residues[(idx % WHEEL_TOTIENT) as usize]
    }

    /// Classify `n`: wheel prime, multiple of a wheel prime, or represented
    /// coprime with its linear index.
    pub fn classify(&self, n: u64) -> Result<WheelClass> {
        // 2 never reaches the residue lookup: it is even and the counting
        // layer treats it as an unrepresented special case throughout.
        if matches!(n, 3 | 5 | 7 | 11 | 13 | 17 | 19 | 23) {
            return Ok(WheelClass::SmallPrime);
        }
        if WHEEL_PRIMES.iter().any(|&p| n % p == 0) {
            return Ok(WheelClass::HasSmallFactor);
        }

        let rem = n % WHEEL_MODULUS;
        let mut lo = 0usize;
        let mut hi = self.residues.len();
        while hi - lo > 8 {
            let mid = lo + (hi - lo) / 2;
            if self.residues[mid] > rem {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        while self.residues[lo] != rem {
            lo += 1;
            if lo >= hi {
                // rem is coprime to the modulus, so a slot must exist.
                return Err(Error::WheelInconsistency {
                    value: n,
                    remainder: rem,
                });
            }
        }
        Ok(WheelClass::Coprime(
            WHEEL_TOTIENT * (n / WHEEL_MODULUS) + lo as u64,
        ))
    }

    /// Number of residues per wheel period.
    #[inline]
    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    /// Residue at table position `offset` (0-based, ascending).
    #[inline]
    pub fn residue(&self, offset: usize) -> u64 {
        self.residues[offset]
    }
}
