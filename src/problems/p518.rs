//! Prime triples a < b < c < n with a + 1, b + 1, c + 1 in geometric
//! progression; S(10⁸).
//!
//! Every such progression is (k·x², k·x·y, k·y²) with gcd(x, y) = 1 and x < y.

use rayon::prelude::*;

use crate::answer::Answer;
use crate::number_theory::{gcd, isqrt, sieve};

/// Σ (a + b + c) over prime triples below `n`.
pub fn triple_sum(n: u64) -> u64 {
    let is_prime = sieve(n as usize);
    let prime = |v: u64| v < n && is_prime[v as usize];
    (2..=isqrt(n))
        .into_par_iter()
        .map(|y| {
            let mut total = 0;
            let yy = y * y;
            for x in (1..y).filter(|&x| gcd(x, y) == 1) {
                let mut k = 1;
                while k * yy <= n {
                    let (a, b, c) = (k * x * x - 1, k * x * y - 1, k * yy - 1);
                    if a >= 2 && prime(c) && prime(a) && prime(b) {
                        total += a + b + c;
                    }
                    k += 1;
                }
            }
            total
        })
        .sum()
}

pub fn solve() -> Answer {
    Answer::from(triple_sum(100_000_000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_hundred() {
        assert_eq!(triple_sum(100), 1035);
    }

    #[test]
    fn test_matches_brute_force() {
        let n = 600u64;
        let ps = crate::number_theory::primes(n as usize);
        let mut brute = 0;
        for (i, &a) in ps.iter().enumerate() {
            for (j, &b) in ps.iter().enumerate().skip(i + 1) {
                for &c in &ps[j + 1..] {
                    if (b + 1) * (b + 1) == (a + 1) * (c + 1) {
                        brute += a + b + c;
                    }
                }
            }
        }
        assert_eq!(triple_sum(n), brute);
    }
}
