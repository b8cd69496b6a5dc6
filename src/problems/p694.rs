//! Cube-full divisors: S(10¹⁸) = Σ_{n≤N} (number of cube-full divisors of n).
//!
//! Swapping the sums gives S(N) = Σ ⌊N/c⌋ over cube-full c ≤ N (1 included).
//! Cube-full numbers are products of p^e with e ≥ 3, so a DFS over primes
//! up to ∛N enumerates them.

use crate::answer::Answer;
use crate::number_theory::{icbrt, primes};

fn walk(ps: &[u64], start: usize, c: u64, n: u64, total: &mut u128) {
    *total += (n / c) as u128;
    for (j, &p) in ps.iter().enumerate().skip(start) {
        let cube = p * p * p;
        if cube > n / c {
            break;
        }
        let mut q = c * cube;
        loop {
            walk(ps, j + 1, q, n, total);
            if q > n / p {
                break;
            }
            q *= p;
        }
    }
}

/// S(`n`).
pub fn cube_full_divisor_sum(n: u64) -> u128 {
    let ps = primes(icbrt(n) as usize + 1);
    let mut total = 0;
    walk(&ps, 0, 1, n, &mut total);
    total
}

pub fn solve() -> Answer {
    Answer::Integer(cube_full_divisor_sum(1_000_000_000_000_000_000) as i128)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number_theory::divisors;

    #[test]
    fn test_statement_values() {
        assert_eq!(cube_full_divisor_sum(16), 19);
        assert_eq!(cube_full_divisor_sum(100), 126);
        assert_eq!(cube_full_divisor_sum(10_000), 13344);
    }

    #[test]
    fn test_matches_divisor_count() {
        let cube_full = |d: u64| crate::number_theory::factorize(d).iter().all(|&(_, e)| e >= 3);
        let direct: u128 = (1..=3000u64)
            .map(|n| divisors(n).into_iter().filter(|&d| cube_full(d)).count() as u128)
            .sum();
        assert_eq!(cube_full_divisor_sum(3000), direct);
    }
}
