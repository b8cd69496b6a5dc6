//! Divisibility of factorials: Σ s(n) for 2 ≤ n ≤ 10⁸, where s(n) is the
//! least m with n | m!.
//!
//! s(n) is the maximum over prime powers p^e ‖ n of the least m with
//! v_p(m!) ≥ e. A sieve over prime powers records that maximum for every n;
//! a zero entry when p is reached marks p as prime.

use crate::answer::Answer;

/// Least m with v_p(m!) >= e.
pub fn least_factorial_for_power(p: u64, e: u32) -> u64 {
    let mut m = 0;
    let mut v = 0;
    while v < e {
        m += p;
        let mut t = m;
        while t % p == 0 {
            v += 1;
            t /= p;
        }
    }
    m
}

/// s(n) for every `n <= limit` (s(0) = s(1) = 0).
pub fn kempner_table(limit: usize) -> Vec<u32> {
    let mut s = vec![0u32; limit + 1];
    for p in 2..=limit {
        if s[p] != 0 {
            continue;
        }
        let p64 = p as u64;
        let mut pe = p64;
        let mut e = 1;
        while pe <= limit as u64 {
            let m = least_factorial_for_power(p64, e) as u32;
            let mut j = pe as usize;
            while j <= limit {
                if s[j] < m {
                    s[j] = m;
                }
                j += pe as usize;
            }
            pe = match pe.checked_mul(p64) {
                Some(v) => v,
                None => break,
            };
            e += 1;
        }
    }
    s
}

/// Σ s(n) for `2 <= n <= limit`.
pub fn kempner_sum(limit: usize) -> u64 {
    kempner_table(limit).iter().map(|&v| v as u64).sum()
}

pub fn solve() -> Answer {
    Answer::from(kempner_sum(100_000_000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_values() {
        let s = kempner_table(100);
        assert_eq!(s[10], 5);
        assert_eq!(s[25], 10);
        assert_eq!(kempner_sum(100), 2012);
    }

    #[test]
    fn test_matches_factorial_search() {
        let s = kempner_table(300);
        for n in 2..=300u64 {
            let mut f = 1u64;
            let mut m = 0;
            while f % n != 0 {
                m += 1;
                f = f * m % n;
            }
            assert_eq!(s[n as usize] as u64, m, "n={}", n);
        }
    }
}
