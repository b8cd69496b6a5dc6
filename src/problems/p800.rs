//! Hybrid integers p^q·q^p ≤ 800800^800800 for distinct primes p, q.
//!
//! Compared in logarithms: q·ln p + p·ln q ≤ e·ln b. The smaller prime is
//! at least 2, so the larger one is below e·ln b / ln 2; a two-pointer sweep
//! over the sorted primes counts the pairs.

use crate::answer::Answer;
use crate::number_theory::primes;

/// Hybrid integers not exceeding `base^exponent`.
pub fn count_hybrid(base: u64, exponent: u64) -> u64 {
    let limit = exponent as f64 * (base as f64).ln();
    let ps = primes((limit / 2f64.ln()) as usize + 2);
    let logs: Vec<f64> = ps.iter().map(|&p| (p as f64).ln()).collect();
    let weight = |i: usize, j: usize| ps[j] as f64 * logs[i] + ps[i] as f64 * logs[j];

    let mut count = 0u64;
    let mut j = ps.len().saturating_sub(1);
    for i in 0..ps.len() {
        while j > i && weight(i, j) > limit {
            j -= 1;
        }
        if j <= i {
            break;
        }
        count += (j - i) as u64;
    }
    count
}

pub fn solve() -> Answer {
    Answer::from(count_hybrid(800_800, 800_800))
}
