//! Hexagonal orchards: hidden trees in an orchard of order 10⁸.
//!
//! Each of the six triangular sectors hides the lattice points (a, b) of ring
//! k that are not primitive, k − φ(k) of them, so H(n) = 6·Σ_{k≤n}(k − φ(k))
//! = 6·(n(n+1)/2 − Φ(n)) with Φ the totient summatory function.
//!
//! Φ is evaluated with the recursion
//! Φ(n) = n(n+1)/2 − Σ_{d≥2} Φ(⌊n/d⌋), sieving the small arguments directly.

use crate::answer::Answer;
use crate::memo::Memo;
use crate::number_theory::totient_sieve;

/// Totient summatory function Φ(n) = Σ_{k≤n} φ(k).
pub struct TotientSum {
    prefix: Vec<u64>,
    memo: Memo<u64>,
}

impl TotientSum {
    /// Sieve Φ directly up to roughly n^(2/3).
    pub fn new(n: u64) -> Self {
        let cutoff = ((n as f64).powf(2.0 / 3.0) as u64).clamp(1000, n.max(1000)) as usize;
        let phi = totient_sieve(cutoff);
        let mut prefix = Vec::with_capacity(phi.len());
        let mut acc = 0u64;
        for v in phi {
            acc += v;
            prefix.push(acc);
        }
        TotientSum {
            prefix,
            memo: Memo::new(),
        }
    }

    pub fn get(&mut self, n: u64) -> u64 {
        if (n as usize) < self.prefix.len() {
            return self.prefix[n as usize];
        }
        if let Some(v) = self.memo.get(n) {
            return v;
        }
        let mut total = n * (n + 1) / 2;
        let mut d = 2;
        while d <= n {
            let q = n / d;
            let last = n / q;
            total -= (last - d + 1) * self.get(q);
            d = last + 1;
        }
        self.memo.insert(n, total)
    }
}

/// Hidden points in a hexagonal orchard of order `n`.
pub fn hidden_points(n: u64) -> u64 {
    let phi_sum = TotientSum::new(n).get(n);
    6 * (n * (n + 1) / 2 - phi_sum)
}

pub fn solve() -> Answer {
    Answer::from(hidden_points(100_000_000))
}
