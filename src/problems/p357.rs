//! Prime generating integers: Σ n ≤ 10⁸ such that d + n/d is prime for
//! every divisor d of n.
//!
//! d = 1 forces n + 1 prime, so n = 1 or n even; d = 2 then forces n/2 odd.
//! A repeated prime factor p makes p + n/p divisible by p, so only squarefree
//! n = 2m survive to the full divisor check.

use crate::answer::Answer;
use crate::number_theory::{divisors_from_factors, OddFactorSieve};
use crate::parallel::{par_sum_range, par_sum_range_with_progress, DEFAULT_CHUNK};

fn is_generating(n: u64, sieve: &OddFactorSieve) -> bool {
    if !sieve.is_prime(n + 1) {
        return false;
    }
    let factors = sieve.factorize(n);
    if factors.iter().any(|&(_, e)| e > 1) {
        return false;
    }
    divisors_from_factors(&factors)
        .into_iter()
        .take_while(|&d| d * d <= n)
        .all(|d| sieve.is_prime(d + n / d))
}

/// Σ of prime generating integers `n <= limit`.
pub fn prime_generating_sum(limit: u64, verbose: bool) -> u64 {
    let sieve = OddFactorSieve::new(limit + 1);
    let chunk_sum = |r: std::ops::Range<u64>| -> u128 {
        // n = 2m with m odd: n ≡ 2 (mod 4)
        let start = r.start + (6 - r.start % 4) % 4;
        (start..r.end)
            .step_by(4)
            .filter(|&n| is_generating(n, &sieve))
            .map(|n| n as u128)
            .sum()
    };
    let total = if verbose {
        par_sum_range_with_progress("Problem 357", 0..limit + 1, DEFAULT_CHUNK, chunk_sum)
    } else {
        par_sum_range(0..limit + 1, DEFAULT_CHUNK, chunk_sum)
    };
    // n = 1 is prime generating
    total as u64 + u64::from(limit >= 1)
}

pub fn solve() -> Answer {
    Answer::from(prime_generating_sum(100_000_000, true))
}
