//! Divisibility streaks: Σ P(i, 4^i) for 1 ≤ i ≤ 31.
//!
//! streak(n) ≥ s iff k + 1 | n + k for k < s, i.e. lcm(1..s) | n − 1. So
//! P(s, N) counts 1 < n < N with lcm(1..s) | n − 1 but lcm(1..s+1) ∤ n − 1.

use crate::answer::Answer;
use crate::number_theory::lcm;

/// Smallest k with n + k not divisible by k + 1.
pub fn streak(n: u64) -> u64 {
    let mut k = 1;
    while (n + k) % (k + 1) == 0 {
        k += 1;
    }
    k
}

fn lcm_upto(s: u64) -> u64 {
    (1..=s).fold(1, lcm)
}

/// Count of `1 < n < big_n` with streak(n) = `s`.
pub fn streak_count(s: u64, big_n: u64) -> u64 {
    let span = big_n.saturating_sub(2);
    span / lcm_upto(s) - span / lcm_upto(s + 1)
}

pub fn solve() -> Answer {
    Answer::from((1..=31u32).map(|i| streak_count(i as u64, 4u64.pow(i))).sum::<u64>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_values() {
        assert_eq!(streak(13), 4);
        assert_eq!(streak(120), 1);
        assert_eq!(streak_count(3, 14), 1);
        assert_eq!(streak_count(6, 1_000_000), 14286);
    }

    #[test]
    fn test_counts_match_direct() {
        for s in 1..=6 {
            let direct = (2..5000).filter(|&n| streak(n) == s).count() as u64;
            assert_eq!(streak_count(s, 5000), direct, "s={}", s);
        }
    }
}
