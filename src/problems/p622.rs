//! Riffle shuffles: Σ n such that a perfect riffle of n cards restores the
//! deck after exactly 60 shuffles.
//!
//! Card i (0-based, not the last) of an even deck moves to 2i mod (n − 1), so
//! s(n) = ord_{n−1}(2). Those n − 1 are the divisors of 2⁶⁰ − 1 at which
//! the order of 2 is not a proper divisor of 60.

use crate::answer::Answer;
use crate::number_theory::{divisors, factorize, pow_mod};

/// Σ n with s(n) = `k`.
pub fn riffle_sum(k: u32) -> u64 {
    assert!((1..64).contains(&k), "k={} out of range", k);
    let k = k as u64;
    let k_primes: Vec<u64> = factorize(k).into_iter().map(|(q, _)| q).collect();
    divisors((1u64 << k) - 1)
        .into_iter()
        .filter(|&d| d >= 2)
        .filter(|&d| k_primes.iter().all(|&q| pow_mod(2, k / q, d) != 1))
        .map(|d| d + 1)
        .sum()
}

pub fn solve() -> Answer {
    Answer::from(riffle_sum(60))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffles(n: usize) -> u32 {
        let start: Vec<usize> = (0..n).collect();
        let mut deck = start.clone();
        let mut count = 0;
        loop {
            let (top, bottom) = deck.split_at(n / 2);
            deck = top.iter().zip(bottom).flat_map(|(&a, &b)| [a, b]).collect();
            count += 1;
            if deck == start {
                return count;
            }
        }
    }

    #[test]
    fn test_standard_deck() {
        assert_eq!(shuffles(52), 8);
    }

    #[test]
    fn test_order_eight() {
        let direct: u64 = (2..=256).step_by(2).filter(|&n| shuffles(n) == 8).map(|n| n as u64).sum();
        assert_eq!(direct, 412);
        assert_eq!(riffle_sum(8), 412);
    }
}
