//! Divisibility multipliers for primes below 10⁷.
//!
//! For p coprime to 10 the divisibility multiplier of p is the inverse of 10
//! modulo p: n = 10a + b is divisible by p iff a + m·b is.

use crate::answer::Answer;
use crate::number_theory::{mod_inverse, primes};

/// Divisibility multiplier of `p`, if `p` is coprime to 10.
pub fn multiplier(p: u64) -> Option<u64> {
    mod_inverse(10 % p, p)
}

/// Σ of multipliers over primes `p < limit` coprime to 10.
pub fn multiplier_sum(limit: u64) -> u64 {
    primes(limit as usize)
        .into_iter()
        .filter(|&p| p != 2 && p != 5)
        .filter_map(multiplier)
        .sum()
}

pub fn solve() -> Answer {
    Answer::from(multiplier_sum(10_000_000))
}
