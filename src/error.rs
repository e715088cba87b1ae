//! # Error — Failure Taxonomy
//!
//! Every failure in the precompute pipeline and the search loop is terminal
//! for the run; there are no retries. The variants keep the three fault
//! classes distinguishable so callers and tests can tell a corrupted wheel
//! table apart from an out-of-memory condition or a caller-side
//! precondition violation.

use std::collections::TryReserveError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The residue table has no slot for a remainder that passed the
    /// divisibility pre-check. Indicates a defect in wheel construction.
    #[error("wheel residue table has no slot for remainder {remainder} of {value}")]
    WheelInconsistency { value: u64, remainder: u64 },

    /// Wheel construction produced the wrong number of residues.
    #[error("wheel construction produced {actual} residues, expected {expected}")]
    WheelCardinality { expected: usize, actual: usize },

    /// A precompute buffer could not be allocated. The failing build step
    /// is abandoned before any dependent component sees partial state.
    #[error("failed to allocate {what} ({bytes} bytes)")]
    Allocation {
        what: &'static str,
        bytes: usize,
        #[source]
        source: TryReserveError,
    },

    /// An exact count was requested beyond the sieve ceiling. Callers must
    /// switch to the conservative estimators past this point.
    #[error("exact count requested at {query}, beyond the sieve ceiling {max_prime}")]
    CeilingExceeded { query: u64, max_prime: u64 },

    /// The prime list ran out before the inner loop's `p² > x` condition
    /// was met: the list is too short for the thresholds this run reaches.
    #[error("prime list exhausted at index {index} (length {len})")]
    PrimeListExhausted { index: usize, len: usize },
}

impl Error {
    /// Wrap a failed reservation of `len` elements of `T` for buffer `what`.
    pub(crate) fn allocation<T>(
        what: &'static str,
        len: usize,
    ) -> impl FnOnce(TryReserveError) -> Error {
        move |source| Error::Allocation {
            what,
            bytes: len * std::mem::size_of::<T>(),
            source,
        }
    }
}
