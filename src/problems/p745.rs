//! Sum of squares II: S(10¹⁴) = Σ_{n≤N} g(n) mod 10⁹ + 7, g(n) the largest
//! square dividing n.
//!
//! g(n) = Σ_{d² | n} J₂(d) with Jordan's totient J₂(d) = d²·Π(1 − p⁻²), so
//! S(N) = Σ_{d≤√N} J₂(d)·⌊N/d²⌋.

use crate::answer::Answer;
use crate::number_theory::isqrt;

/// Jordan's J₂ for `0..=n`.
pub fn jordan2_sieve(n: usize) -> Vec<u64> {
    let mut j: Vec<u64> = (0..=n as u64).map(|i| i * i).collect();
    for i in 2..=n {
        let sq = (i * i) as u64;
        if j[i] == sq {
            let mut k = i;
            while k <= n {
                j[k] -= j[k] / sq;
                k += i;
            }
        }
    }
    j
}

/// S(`n`) mod `modulus`.
pub fn square_divisor_sum(n: u64, modulus: u64) -> u64 {
    let r = isqrt(n) as usize;
    let j = jordan2_sieve(r);
    let m = modulus as u128;
    (1..=r).fold(0u128, |acc, d| {
        let d2 = (d * d) as u64;
        (acc + (j[d] as u128 % m) * ((n / d2) as u128 % m)) % m
    }) as u64
}

pub fn solve() -> Answer {
    Answer::from(square_divisor_sum(100_000_000_000_000, 1_000_000_007))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn largest_square_divisor(n: u64) -> u64 {
        (1..=isqrt(n)).rev().map(|d| d * d).find(|&s| n % s == 0).unwrap_or(1)
    }

    #[test]
    fn test_statement_values() {
        assert_eq!(square_divisor_sum(10, 1_000_000_007), 24);
        assert_eq!(square_divisor_sum(100, 1_000_000_007), 767);
    }

    #[test]
    fn test_matches_direct_sum() {
        let direct: u64 = (1..=5000).map(largest_square_divisor).sum();
        assert_eq!(square_divisor_sum(5000, u64::MAX >> 1), direct);
    }
}
