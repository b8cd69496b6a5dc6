//! Balanced numbers: T(47) mod 3¹⁵.
//!
//! A k-digit number is balanced when its first ⌈k/2⌉ and last ⌈k/2⌉ digits
//! have equal sums. Splitting into first half, optional middle digit and last
//! half, the halves only interact through their digit sum s, so per length it
//! is enough to know, for h-digit strings with digit sum s, how many there
//! are and the sum of their values.

use crate::answer::Answer;
use crate::number_theory::{mul_mod, pow_mod};

/// Σ of balanced numbers below 10^`digits`, mod `modulus`.
pub fn balanced_sum(digits: u32, modulus: u64) -> u64 {
    if digits == 0 {
        return 0;
    }
    let m = modulus;
    let half = (digits / 2) as usize;
    let max_sum = 9 * half;
    // count[k][s], value[k][s] over k-digit strings, leading zeros allowed
    let mut count = vec![vec![0u64; max_sum + 1]; half + 1];
    let mut value = vec![vec![0u64; max_sum + 1]; half + 1];
    count[0][0] = 1 % m;
    for k in 1..=half {
        for s in 0..=max_sum {
            for d in 0..=9u64.min(s as u64) {
                let prev = s - d as usize;
                let c = count[k - 1][prev];
                count[k][s] = (count[k][s] + c) % m;
                let v = (mul_mod(value[k - 1][prev], 10, m) + mul_mod(d, c, m)) % m;
                value[k][s] = (value[k][s] + v) % m;
            }
        }
    }

    let mut total = 45 % m;
    for len in 2..=digits {
        let h = (len / 2) as usize;
        let odd = len % 2 == 1;
        let shift = pow_mod(10, h as u64, m);
        for s in 0..=9 * h {
            // first half must not start with a zero
            let fc = (count[h][s] + m - count[h - 1][s]) % m;
            let fs = (value[h][s] + m - value[h - 1][s]) % m;
            let (lc, ls) = (count[h][s], value[h][s]);
            let term = if odd {
                let a = mul_mod(mul_mod(fs, mul_mod(shift, 100, m), m), lc, m);
                let b = mul_mod(mul_mod(45, shift, m), mul_mod(fc, lc, m), m);
                let c = mul_mod(mul_mod(ls, fc, m), 10, m);
                (a + b + c) % m
            } else {
                (mul_mod(mul_mod(fs, shift, m), lc, m) + mul_mod(ls, fc, m)) % m
            };
            total = (total + term) % m;
        }
    }
    total
}

pub fn solve() -> Answer {
    Answer::from(balanced_sum(47, 3u64.pow(15)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute(digits: u32) -> u64 {
        (1..10u64.pow(digits))
            .filter(|&n| {
                let ds: Vec<u64> = n.to_string().bytes().map(|b| (b - b'0') as u64).collect();
                let h = (ds.len() + 1) / 2;
                ds[..h].iter().sum::<u64>() == ds[ds.len() - h..].iter().sum::<u64>()
            })
            .sum()
    }

    #[test]
    fn test_known_values() {
        let big = 1u64 << 62;
        assert_eq!(balanced_sum(0, big), 0);
        assert_eq!(balanced_sum(1, big), 45);
        assert_eq!(balanced_sum(2, big), 540);
        assert_eq!(balanced_sum(5, big), 334795890);
    }

    #[test]
    fn test_matches_brute_force() {
        assert_eq!(balanced_sum(4, 1 << 62), brute(4));
        assert_eq!(balanced_sum(5, 1_000_007), brute(5) % 1_000_007);
    }
}
