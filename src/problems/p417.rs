//! Reciprocal cycles II: Σ L(n) for 3 ≤ n ≤ 10⁸, where L(n) is the length of
//! the recurring cycle of 1/n (0 for terminating decimals).
//!
//! Writing n = 2^a·5^b·m with gcd(m, 10) = 1, L(n) = ord_m(10), the lcm of the
//! orders modulo each prime power of m. So each m is visited once and weighted
//! by the number of 2^a·5^b ≤ N/m. Orders modulo primes are computed up front
//! and lifted to prime powers on demand: ord_{p^{e+1}}(10) is ord_{p^e}(10) or
//! p times it.

use rayon::prelude::*;

use crate::answer::Answer;
use crate::number_theory::{lcm, pow_mod, reduce_order, OddFactorSieve};
use crate::parallel::{par_sum_range, par_sum_range_with_progress, DEFAULT_CHUNK};

/// Length of the recurring cycle of 1/n by direct iteration.
pub fn cycle_length(mut n: u64) -> u64 {
    while n % 2 == 0 {
        n /= 2;
    }
    while n % 5 == 0 {
        n /= 5;
    }
    if n == 1 {
        return 0;
    }
    let mut k = 1;
    let mut x = 10 % n;
    while x != 1 {
        x = x * 10 % n;
        k += 1;
    }
    k
}

/// Cycle lengths for every n up to a limit.
pub struct CycleLengths {
    limit: u64,
    sieve: OddFactorSieve,
    primes: Vec<u32>,
    orders: Vec<u32>,
    /// 2^a·5^b ≤ limit, ascending.
    smooth: Vec<u64>,
}

impl CycleLengths {
    pub fn new(limit: u64) -> Self {
        let sieve = OddFactorSieve::new(limit.max(3));
        let primes: Vec<u32> = (3..=limit)
            .step_by(2)
            .filter(|&p| p != 5 && sieve.is_prime(p))
            .map(|p| p as u32)
            .collect();
        let orders: Vec<u32> = primes
            .par_iter()
            .map(|&p| {
                let p = p as u64;
                reduce_order(10 % p, p, p - 1, &sieve.factorize(p - 1)) as u32
            })
            .collect();

        let mut smooth = Vec::new();
        let mut two = 1u64;
        while two <= limit {
            let mut v = two;
            while v <= limit {
                smooth.push(v);
                v *= 5;
            }
            two *= 2;
        }
        smooth.sort_unstable();

        CycleLengths {
            limit,
            sieve,
            primes,
            orders,
            smooth,
        }
    }

    fn prime_order(&self, p: u64) -> u64 {
        match self.primes.binary_search(&(p as u32)) {
            Ok(i) => self.orders[i] as u64,
            Err(_) => reduce_order(10 % p, p, p - 1, &self.sieve.factorize(p - 1)),
        }
    }

    /// ord_m(10) for `m` coprime to 10 (1 for m = 1).
    pub fn order(&self, m: u64) -> u64 {
        self.sieve
            .factorize(m)
            .into_iter()
            .fold(1, |acc, (p, e)| {
                let mut o = self.prime_order(p);
                let mut pe = p;
                for _ in 1..e {
                    pe *= p;
                    if pow_mod(10, o, pe) != 1 {
                        o *= p;
                    }
                }
                lcm(acc, o)
            })
    }

    fn weighted(&self, range: std::ops::Range<u64>) -> u128 {
        let mut total = 0u128;
        for m in range {
            if m < 3 || m % 2 == 0 || m % 5 == 0 {
                continue;
            }
            let multiples = self.smooth.partition_point(|&k| k <= self.limit / m) as u128;
            total += self.order(m) as u128 * multiples;
        }
        total
    }

    /// Σ L(n) for `3 <= n <= limit`.
    pub fn sum(&self, verbose: bool) -> u64 {
        let range = 3..self.limit + 1;
        let total = if verbose {
            par_sum_range_with_progress("Problem 417", range, DEFAULT_CHUNK, |r| self.weighted(r))
        } else {
            par_sum_range(range, DEFAULT_CHUNK, |r| self.weighted(r))
        };
        total as u64
    }
}

pub fn solve() -> Answer {
    Answer::from(CycleLengths::new(100_000_000).sum(true))
}
