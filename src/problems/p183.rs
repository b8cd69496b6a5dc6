//! Maximum product of parts: Σ D(N) for 5 ≤ N ≤ 10000.
//!
//! (N/k)^k is maximal for k ≈ N/e; comparing k·ln(N/k) at the floor and the
//! ceiling picks it. N/k in lowest terms terminates iff the reduced
//! denominator has no prime factors besides 2 and 5.

use crate::answer::Answer;
use crate::number_theory::gcd;

/// Number of equal parts maximizing the product (N/k)^k.
pub fn best_parts(n: u64) -> u64 {
    let lo = ((n as f64) / std::f64::consts::E).floor().max(1.0) as u64;
    let hi = lo + 1;
    let score = |k: u64| k as f64 * (n as f64 / k as f64).ln();
    if score(lo) > score(hi) {
        lo
    } else {
        hi
    }
}

/// −N if the maximal product is a terminating decimal, N otherwise.
pub fn d(n: u64) -> i64 {
    let k = best_parts(n);
    let mut den = k / gcd(n, k);
    while den % 2 == 0 {
        den /= 2;
    }
    while den % 5 == 0 {
        den /= 5;
    }
    if den == 1 {
        -(n as i64)
    } else {
        n as i64
    }
}

/// Σ D(N) for `lo <= N <= hi`.
pub fn sum_d(lo: u64, hi: u64) -> i64 {
    (lo..=hi).map(d).sum()
}

pub fn solve() -> Answer {
    Answer::from(sum_d(5, 10_000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_cases() {
        // M(11) = (11/4)^4 terminates, M(8) = (8/3)^3 does not
        assert_eq!(best_parts(11), 4);
        assert_eq!(d(11), -11);
        assert_eq!(d(8), 8);
        assert_eq!(d(5), -5);
    }

    #[test]
    fn test_up_to_hundred() {
        assert_eq!(sum_d(5, 100), 2438);
    }
}
