//! N-th digit of reciprocals: S(10⁷) = Σ_{k≤n} d_n(1/k).
//!
//! The n-th decimal digit of 1/k is ⌊10·(10^(n−1) mod k)/k⌋.

use crate::answer::Answer;
use crate::number_theory::pow_mod;
use crate::parallel::{par_sum_range, DEFAULT_CHUNK};

/// The `n`-th digit after the decimal point of 1/`k`.
pub fn nth_digit(n: u64, k: u64) -> u64 {
    10 * pow_mod(10, n - 1, k) / k
}

/// S(`n`).
pub fn digit_sum(n: u64) -> u64 {
    par_sum_range(1..n + 1, DEFAULT_CHUNK, |r| r.map(|k| nth_digit(n, k) as u128).sum()) as u64
}

pub fn solve() -> Answer {
    Answer::from(digit_sum(10_000_000))
}
