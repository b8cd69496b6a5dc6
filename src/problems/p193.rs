//! Squarefree numbers below 2⁵⁰.
//!
//! Q(N) = Σ_{d ≤ √N} μ(d)·⌊N/d²⌋ for the count of squarefree n ≤ N.

use crate::answer::Answer;
use crate::number_theory::{isqrt, mobius_sieve};

/// Squarefree numbers `1 <= n < limit`.
pub fn count_squarefree(limit: u64) -> u64 {
    if limit <= 1 {
        return 0;
    }
    let n = limit - 1;
    let r = isqrt(n) as usize;
    let mu = mobius_sieve(r);
    let mut total: i64 = 0;
    for d in 1..=r {
        if mu[d] != 0 {
            let d2 = (d * d) as u64;
            total += mu[d] as i64 * (n / d2) as i64;
        }
    }
    total as u64
}

pub fn solve() -> Answer {
    Answer::from(count_squarefree(1 << 50))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_hundred() {
        assert_eq!(count_squarefree(100), 61);
    }

    #[test]
    fn test_matches_factorization() {
        let direct = (1..5000u64)
            .filter(|&n| crate::number_theory::factorize(n).iter().all(|&(_, e)| e == 1))
            .count() as u64;
        assert_eq!(count_squarefree(5000), direct);
    }
}
