//! Semidivisible numbers not exceeding 999966663333.
//!
//! Between p² and q² for consecutive primes p < q, lps(n) = p and ups(n) = q.
//! Those n divisible by exactly one of p and q contribute, which is an
//! inclusion–exclusion over arithmetic progressions.

use crate::answer::Answer;
use crate::number_theory::{isqrt, primes};

/// Σ of multiples of `d` in `lo..=hi`.
fn multiples_sum(d: u128, lo: u128, hi: u128) -> u128 {
    let first = lo.div_ceil(d);
    let last = hi / d;
    if last < first {
        return 0;
    }
    d * (first + last) * (last - first + 1) / 2
}

/// Σ of semidivisible n with `4 <= n <= limit`.
pub fn semidivisible_sum(limit: u64) -> u128 {
    let ps = primes(isqrt(limit) as usize + 200);
    let limit = limit as u128;
    let mut total = 0;
    for pair in ps.windows(2) {
        let (p, q) = (pair[0] as u128, pair[1] as u128);
        let lo = p * p + 1;
        let hi = (q * q - 1).min(limit);
        if lo > hi {
            break;
        }
        total += multiples_sum(p, lo, hi) + multiples_sum(q, lo, hi) - 2 * multiples_sum(p * q, lo, hi);
    }
    total
}

pub fn solve() -> Answer {
    Answer::Integer(semidivisible_sum(999_966_663_333) as i128)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_values() {
        assert_eq!(semidivisible_sum(15), 30);
        assert_eq!(semidivisible_sum(1000), 34825);
    }
}
