//! # Bounds — Conservative Prime-Count Estimates
//!
//! Analytic bounds used in place of exact counts once a query passes the
//! sieve ceiling. Both functions apply directed rounding at every
//! elementary floating-point operation (`f64::next_up`/`f64::next_down`),
//! so the results are provably on the safe side of the true asymptotic
//! bound rather than merely numerically close. The rounding directions are
//! chosen to bias the search *against* an early sign-change detection:
//! the denominator contribution is over-estimated, the numerator
//! contribution under-estimated.
//!
//! The step order of each evaluation is load-bearing — reordering the
//! arithmetic can flip which direction a rounding error is biased.
//!
//! ## References
//!
//! - Pierre Dusart, "Estimates of some functions over primes without RH",
//!   2010: π(x) ≤ x/ln x · (1 + 1/ln x + 2/ln²x + 7.59/ln³x) for x > 1.
//! - Bennett, Martin, O'Bryant, Rechnitzer, "Explicit bounds for primes in
//!   arithmetic progressions", 2018 (lower bound for π(x; 4, 3)).

/// Upper bound on π(x), valid for x > 1: every rounding step pushes the
/// estimate up. Returns `floor(estimate) + 1`.
pub fn upper_bound_primes(x: u64) -> u64 {
    // ln x is rounded down throughout: it only ever appears in divisors.
    let log_x = (x as f64).next_down().ln().next_down();
    let log_x_pow2 = (log_x * log_x).next_down();
    let mut part = (7.59f64.next_up() / (log_x * log_x_pow2).next_down()).next_up();
    part = (part + (2.0 / log_x_pow2).next_up()).next_up();
    part = (part + (1.0 / log_x).next_up()).next_up();
    part = (part + 1.0).next_up();
    let x_float = (x as f64).next_up();
    let estimate = ((x_float / log_x).next_up() * part).next_up();
    estimate as u64 + 1
}

/// Lower bound on the count of primes ≡ 3 (mod 4) below x: every rounding
/// step pushes the estimate down. Returns `floor(estimate) − 1`,
/// saturating at 0. Intended for large x (beyond any practical sieve
/// ceiling); the bound is not meaningful below ~10.
pub fn lower_bound_primes3(x: u64) -> u64 {
    // ln x rounded up: it appears only in divisors of the lower bound.
    let log_x = (x as f64).next_up().ln().next_up();
    let mut pcf = (1.0 / (2.0 * log_x).next_up()).next_down();
    let pcf_part2 = (0.473f64.next_down() / (log_x * log_x).next_up()).next_down();
    pcf = (pcf + pcf_part2).next_down();
    let x_float = (x as f64).next_down();
    let estimate = (x_float * pcf).next_down();
    (estimate as u64).saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    // ── Sidedness against exact counts ──────────────────────────────────

    /// The upper bound dominates the true π(x) (odd-prime count + 1 for 2)
    /// at every sampled threshold the exact layer can verify.
    #[test]
    fn upper_bound_dominates_exact_count() {
        let ctx = testutil::context_1m();
        for &x in &[100u64, 1_000, 8_192, 65_536, 100_000, 500_000, 1_000_000] {
            let exact = ctx.count(x).unwrap().primes + 1; // include 2
            let bound = upper_bound_primes(x);
            assert!(
                bound >= exact,
                "upper bound {} below true π({}) = {}",
                bound,
                x,
                exact
            );
        }
    }

    /// The lower bound stays below the true π₃(x) at every sampled
    /// threshold.
    #[test]
    fn lower_bound_stays_below_exact_count() {
        let ctx = testutil::context_1m();
        for &x in &[100u64, 1_000, 8_192, 65_536, 100_000, 500_000, 1_000_000] {
            let exact = ctx.count(x).unwrap().primes3;
            let bound = lower_bound_primes3(x);
            assert!(
                bound <= exact,
                "lower bound {} above true π₃({}) = {}",
                bound,
                x,
                exact
            );
        }
    }

    // ── Known anchors ───────────────────────────────────────────────────

    /// π(10^6) = 78498 and π₃(10^6) = 39322; the bounds must bracket them.
    /// The Dusart bound is tight to a fraction of a percent at this size.
    #[test]
    fn bounds_bracket_one_million() {
        let upper = upper_bound_primes(1_000_000);
        assert!(upper >= 78_498);
        assert!(upper < 82_000, "upper bound uselessly loose: {}", upper);

        let lower = lower_bound_primes3(1_000_000);
        assert!(lower <= 39_322);
        assert!(lower > 36_000, "lower bound uselessly loose: {}", lower);
    }

    /// Beyond any sieve: the bounds stay ordered and positive at 10^12.
    #[test]
    fn bounds_remain_ordered_far_out() {
        let x = 1_000_000_000_000u64;
        let upper = upper_bound_primes(x);
        let lower = lower_bound_primes3(x);
        // π(10^12) = 37,607,912,018; roughly half the primes are ≡ 3 mod 4.
        assert!(upper >= 37_607_912_018);
        assert!(lower <= upper / 2 + upper / 100);
        assert!(lower > 17_000_000_000);
    }

    /// Monotone in x over a coarse grid (the analytic forms are
    /// increasing; directed rounding must not break that by more than the
    /// one-ulp steps it introduces).
    #[test]
    fn bounds_grow_with_x() {
        let mut prev_upper = 0u64;
        let mut prev_lower = 0u64;
        for exp in 3..13u32 {
            let x = 10u64.pow(exp);
            let upper = upper_bound_primes(x);
            let lower = lower_bound_primes3(x);
            assert!(upper > prev_upper, "upper not increasing at 10^{}", exp);
            assert!(lower > prev_lower, "lower not increasing at 10^{}", exp);
            prev_upper = upper;
            prev_lower = lower;
        }
    }
}
