//! Recursively defined sequence: a₁ = 1, a_{2n} = 2a_n, a_{2n+1} = a_n − 3a_{n+1};
//! S(10¹²) = Σ_{n≤N} a_n.
//!
//! Summing a_{2k} + a_{2k+1} = 3a_k − 3a_{k+1} over k telescopes, which gives
//! S(2n) = 4 − a_n and S(2n + 1) = S(2n) + a_{2n+1}. Only O(log N) distinct
//! terms are needed, memoized by index.

use crate::answer::Answer;
use crate::memo::Memo;

/// Terms of the sequence, memoized.
pub struct Sequence {
    memo: Memo<i128>,
}

impl Sequence {
    pub fn new() -> Self {
        Sequence { memo: Memo::new() }
    }

    /// a_n for `n >= 1`.
    pub fn term(&mut self, n: u64) -> i128 {
        if n == 1 {
            return 1;
        }
        if let Some(v) = self.memo.get(n) {
            return v;
        }
        let half = n / 2;
        let v = if n % 2 == 0 {
            2 * self.term(half)
        } else {
            self.term(half) - 3 * self.term(half + 1)
        };
        self.memo.insert(n, v)
    }

    /// S(n) = Σ_{k≤n} a_k.
    pub fn prefix_sum(&mut self, n: u64) -> i128 {
        match n {
            0 => 0,
            1 => 1,
            _ if n % 2 == 0 => 4 - self.term(n / 2),
            _ => 4 - self.term(n / 2) + self.term(n),
        }
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

pub fn solve() -> Answer {
    Answer::Integer(Sequence::new().prefix_sum(1_000_000_000_000))
}
