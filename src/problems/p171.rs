//! Numbers whose digit-square sum is a perfect square; last nine digits of
//! their sum below 10²⁰.
//!
//! Digit DP from the least significant position: for every reachable square
//! sum s keep the count of digit strings reaching s and the sum of their
//! values (mod m). Leading zeros contribute nothing to either, so strings of
//! exactly `digits` positions cover every 0 < n < 10^digits.

use crate::answer::Answer;
use crate::number_theory::isqrt;

/// Σ n (mod `modulus`) over 0 < n < 10^digits whose digit-square sum is a
/// perfect square.
pub fn square_digit_sum(digits: u32, modulus: u64) -> u64 {
    let max_sum = 81 * digits as usize;
    let m = modulus as u128;
    let mut count = vec![0u128; max_sum + 1];
    let mut total = vec![0u128; max_sum + 1];
    count[0] = 1;
    let mut place = 1u128 % m;
    for _ in 0..digits {
        let mut next_count = vec![0u128; max_sum + 1];
        let mut next_total = vec![0u128; max_sum + 1];
        for s in 0..=max_sum {
            if count[s] == 0 {
                continue;
            }
            for d in 0..10u128 {
                let t = s + (d * d) as usize;
                if t > max_sum {
                    break;
                }
                next_count[t] = (next_count[t] + count[s]) % m;
                next_total[t] = (next_total[t] + total[s] + d * place % m * count[s]) % m;
            }
        }
        count = next_count;
        total = next_total;
        place = place * 10 % m;
    }
    let sum = (1..=max_sum)
        .filter(|&s| {
            let r = isqrt(s as u64);
            r * r == s as u64
        })
        .fold(0u128, |acc, s| (acc + total[s]) % m);
    sum as u64
}

pub fn solve() -> Answer {
    Answer::from(square_digit_sum(20, 1_000_000_000))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute(limit: u64, modulus: u64) -> u64 {
        (1..limit)
            .filter(|&n| {
                let mut s = 0;
                let mut x = n;
                while x > 0 {
                    s += (x % 10) * (x % 10);
                    x /= 10;
                }
                let r = isqrt(s);
                r * r == s
            })
            .sum::<u64>()
            % modulus
    }

    #[test]
    fn test_matches_brute_force() {
        assert_eq!(square_digit_sum(4, 1_000_000_000), brute(10_000, 1_000_000_000));
        assert_eq!(square_digit_sum(5, 1_000), brute(100_000, 1_000));
    }
}
